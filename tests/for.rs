#[macro_use]
mod common;

#[cfg(test)]
mod _for {
    tests! {
        count in for is OK
        "0"
        "1"
        "2"
    }

    tests! {
        initializer_outside in for is OK
        "0"
        "1"
    }

    tests! {
        no_increment in for is OK
        "0"
        "1"
    }

    tests! {
        scope in for is OK
        "0"
        "global"
    }
}

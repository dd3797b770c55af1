#[macro_use]
mod common;

#[cfg(test)]
mod _while {
    tests! {
        count in while is OK
        "0"
        "1"
        "2"
    }

    tests! {
        false_condition in while is OK
        "done"
    }
}

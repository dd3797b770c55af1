#[macro_use]
mod common;

#[cfg(test)]
mod string {
    tests! {
        literal in string is OK
        "hello"
    }

    tests! {
        multiline in string is OK
        "one"
        "two"
    }

    tests! {
        concat_chain in string is OK
        "abc"
    }
}

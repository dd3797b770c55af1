#[macro_use]
mod common;

#[cfg(test)]
mod lambda {
    tests! {
        stored in lambda is OK
        "10"
    }

    tests! {
        argument in lambda is OK
        "7"
    }

    tests! {
        display in lambda is OK
        "<fn>"
    }

    tests! {
        immediate_call in lambda is OK
        "3"
    }
}

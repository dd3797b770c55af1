#[macro_use]
mod common;

#[cfg(test)]
mod constructor {
    tests! {
        init in constructor is OK
        "3"
        "4"
    }

    tests! {
        returns_this in constructor is OK
        "true"
    }

    tests! {
        early_return in constructor is OK
        "set"
    }

    tests! {
        direct_call in constructor is OK
        "true"
    }

    tests! {
        return_value in constructor is ERR
        "[Line 3] Error at 'return': Cannot return a value from an initializer"
    }

    tests! {
        arity in constructor is ERR
        "[Line 4] Expected 2 arguments but got 1"
    }
}

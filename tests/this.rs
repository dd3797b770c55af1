#[macro_use]
mod common;

#[cfg(test)]
mod this {
    tests! {
        in_nested_function in this is OK
        "works"
    }

    tests! {
        outside_class in this is ERR
        "[Line 1] Error at 'this': Cannot use 'this' outside of a class"
    }

    tests! {
        in_function in this is ERR
        "[Line 2] Error at 'this': Cannot use 'this' outside of a class"
    }
}

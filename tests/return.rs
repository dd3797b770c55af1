#[macro_use]
mod common;

#[cfg(test)]
mod _return {
    tests! {
        value in return is OK
        "7"
    }

    tests! {
        in_loop in return is OK
        "1"
    }

    tests! {
        bare in return is OK
        "nil"
    }

    tests! {
        nested_blocks in return is OK
        "deep"
    }

    tests! {
        after_else in return is OK
        "positive"
        "rest"
    }

    tests! {
        top_level in return is ERR
        "[Line 1] Error at 'return': Cannot return from top-level code"
    }
}

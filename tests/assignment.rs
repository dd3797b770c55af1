#[macro_use]
mod common;

#[cfg(test)]
mod assignment {
    tests! {
        simple in assignment is OK
        "2"
    }

    tests! {
        is_expression in assignment is OK
        "3"
    }

    tests! {
        chained in assignment is OK
        "3"
        "3"
    }

    tests! {
        local in assignment is OK
        "after"
    }

    tests! {
        invalid_target in assignment is ERR
        "[Line 1] Error at '=': Invalid assignment target"
    }

    tests! {
        undefined in assignment is ERR
        "[Line 1] Undefined variable 'ghost'"
    }
}

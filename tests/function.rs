#[macro_use]
mod common;

#[cfg(test)]
mod function {
    tests! {
        print_function in function is OK
        "<fn f>"
    }

    tests! {
        parameters in function is OK
        "6"
    }

    tests! {
        recursion in function is OK
        "55"
    }

    tests! {
        nil_by_default in function is OK
        "nil"
    }

    tests! {
        mutual_recursion in function is OK
        "true"
        "false"
    }

    tests! {
        arity_less in function is ERR
        "[Line 2] Expected 2 arguments but got 1"
    }

    tests! {
        arity_more in function is ERR
        "[Line 2] Expected 2 arguments but got 4"
    }

    tests! {
        not_callable in function is ERR
        "[Line 1] Can only call functions and classes"
    }
}

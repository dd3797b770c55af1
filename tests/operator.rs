#[macro_use]
mod common;

#[cfg(test)]
mod operator {
    tests! {
        precedence in operator is OK
        "14"
        "20"
    }

    tests! {
        add in operator is OK
        "3"
        "string"
        "x=3"
        "4!"
    }

    tests! {
        arithmetic in operator is OK
        "5"
        "42"
        "3.5"
        "2"
    }

    tests! {
        comparison in operator is OK
        "true"
        "true"
        "false"
        "true"
    }

    tests! {
        equality in operator is OK
        "true"
        "false"
        "true"
        "true"
        "false"
        "true"
        "true"
    }

    tests! {
        not in operator is OK
        "false"
        "true"
        "false"
        "false"
    }

    tests! {
        divide_by_zero in operator is ERR
        "[Line 1] Value cannot be zero"
    }

    tests! {
        add_bool in operator is ERR
        "[Line 1] Binary operation '+' is not supported between boolean type and number type"
    }

    tests! {
        negate_string in operator is ERR
        "[Line 1] Operand must be a number"
    }

    tests! {
        compare_strings in operator is ERR
        "[Line 1] Operands must be numbers"
    }

    tests! {
        subtract_nil in operator is ERR
        "[Line 1] Operands must be numbers"
    }
}

#[macro_use]
mod common;

#[cfg(test)]
mod variable {
    tests! {
        define in variable is OK
        "1"
    }

    tests! {
        default_nil in variable is OK
        "nil"
    }

    tests! {
        shadow in variable is OK
        "inner"
        "outer"
    }

    tests! {
        redeclare_global in variable is OK
        "2"
    }

    tests! {
        undefined in variable is ERR
        "[Line 1] Undefined variable 'ghost'"
    }

    tests! {
        duplicate_local in variable is ERR
        "[Line 3] Error at 'a': A variable is already defined with name 'a' in this scope"
    }

    tests! {
        own_initializer in variable is ERR
        "[Line 3] Error at 'a': Cannot read local variable in its own initializer"
    }
}

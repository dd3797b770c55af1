#[macro_use]
mod common;

#[cfg(test)]
mod inheritance {
    tests! {
        inherit_method in inheritance is OK
        "A"
    }

    tests! {
        override_method in inheritance is OK
        "B"
    }

    tests! {
        inherit_init in inheritance is OK
        "inherited"
    }

    tests! {
        chain in inheritance is OK
        "A"
    }

    tests! {
        superclass_must_be_class in inheritance is ERR
        "[Line 2] Superclass must be a class"
    }
}

#[macro_use]
mod common;

#[cfg(test)]
mod method {
    tests! {
        call in method is OK
        "hello"
    }

    tests! {
        this in method is OK
        "I am Ada"
    }

    tests! {
        bound in method is OK
        "Ada"
    }

    tests! {
        parameters in method is OK
        "5"
    }

    tests! {
        field_shadows_method in method is OK
        "method"
        "field"
    }
}

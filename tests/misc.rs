#[macro_use]
mod common;

#[cfg(test)]
mod misc {
    tests! {
        comment in misc is OK
        "code"
    }

    tests! {
        clock in misc is OK
        "true"
    }

    tests! {
        native_display in misc is OK
        "<native fn clock>"
    }

    tests! {
        empty in misc is OK
    }
}

/// Unwraps an `Err`, panicking with the `Ok` value otherwise.
///
/// Extra arguments are formatted into the panic message.
#[macro_export]
macro_rules! assert_err {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(e) => e,
            Ok(value) => {
                #[allow(unused_mut)]
                let mut msg = format!("expected `Err`; got Ok({:?})", value);
                $(
                    msg.push_str(", ");
                    msg.push_str(&format!($($t)*));
                )?
                panic!("{}", msg);
            }
        }
    };
}

/// Unwraps an `Ok`, panicking with the error otherwise.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(err) => panic!("expected `Ok`; got Err({})", err),
        }
    };
}

/// Unwraps an `Err` and checks it with the given predicate method,
/// e.g. `assert_err_kind!(res, is_configuration_conflict)`.
#[macro_export]
macro_rules! assert_err_kind {
    ($e:expr, $kind:ident) => {{
        let err = $crate::assert_err!($e);
        assert!(
            err.$kind(),
            "expected error satisfying `{}`; got `{}`",
            stringify!($kind),
            err
        );
        err
    }};
}

//! Helper macro for generating domain port error enums.
//!
//! Each driven port declares its adapter error surface with
//! `define_port_error!`, which produces a `thiserror` enum plus snake_case
//! constructor functions accepting `impl Into<T>` for every field.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    define_port_error! {
        pub enum SampleStoreError {
            Connection { message: String } => "store connection failed: {message}",
            Conflict { order_id: i64 } => "conflicting write for order {order_id}",
            Query { message: String, code: u32 } => "query failed: {message} ({code})",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = SampleStoreError::connection("pool exhausted");
        assert_eq!(err.to_string(), "store connection failed: pool exhausted");
    }

    #[test]
    fn constructors_preserve_non_string_types() {
        let err = SampleStoreError::conflict(42i64);
        assert_eq!(err.to_string(), "conflicting write for order 42");
    }

    #[test]
    fn multi_field_variants_format_every_field() {
        let err = SampleStoreError::query("syntax error", 22u32);
        assert_eq!(err.to_string(), "query failed: syntax error (22)");
    }
}

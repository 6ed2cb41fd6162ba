//! `define_port_error!`: error enums for driven ports.
//!
//! Every variant carries a single `message: String` describing the adapter
//! failure. The macro derives `thiserror::Error` with the given display
//! string and adds a snake_case constructor per variant taking
//! `impl Into<String>`.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $display:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($display)]
                $variant { message: String },
            )+
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = concat!("Build a [`", stringify!($name), "::", stringify!($variant), "`].")]
                    pub fn [<$variant:snake>](message: impl Into<String>) -> Self {
                        Self::$variant {
                            message: message.into(),
                        }
                    }
                }
            )+
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum ArchiveError {
            Unreachable => "archive unreachable: {message}",
            ReadOnly => "archive is read-only: {message}",
            DiskFull => "{message}",
        }
    }

    #[test]
    fn constructors_take_borrowed_and_owned_messages() {
        assert_eq!(
            ArchiveError::unreachable("timed out"),
            ArchiveError::Unreachable {
                message: "timed out".to_owned()
            }
        );
        assert_eq!(
            ArchiveError::read_only(String::from("replica")),
            ArchiveError::ReadOnly {
                message: "replica".to_owned()
            }
        );
    }

    #[test]
    fn display_uses_the_declared_format() {
        assert_eq!(
            ArchiveError::unreachable("timed out").to_string(),
            "archive unreachable: timed out"
        );
        assert_eq!(ArchiveError::disk_full("no space").to_string(), "no space");
    }
}

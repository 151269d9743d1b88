use log::LevelFilter;
use num_traits::PrimInt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    None,
    Some,
    Very,
}

impl<X> From<X> for Verbosity
where
    X: PrimInt,
{
    fn from(value: X) -> Self {
        if value < X::one() {
            Verbosity::None
        } else if value < X::one() + X::one() {
            Verbosity::Some
        } else {
            Verbosity::Very
        }
    }
}

impl From<Verbosity> for LevelFilter {
    /// Warnings are always shown, since that is how failed optional steps
    /// reach the user.
    fn from(verbosity: Verbosity) -> Self {
        match verbosity {
            Verbosity::None => LevelFilter::Warn,
            Verbosity::Some => LevelFilter::Info,
            Verbosity::Very => LevelFilter::Debug,
        }
    }
}

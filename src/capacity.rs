use crate::error::QueueError;
use std::fmt;
use std::num::NonZeroUsize;

/// A validated, strictly positive queue capacity.
///
/// Signed integers convert too, so a negative value coming from an
/// untyped source is rejected with the same error as zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "usize", into = "usize")
)]
pub struct Capacity(NonZeroUsize);

impl Capacity {
    pub fn new(cap: usize) -> Result<Self, QueueError> {
        NonZeroUsize::new(cap)
            .map(Capacity)
            .ok_or(QueueError::InvalidArgument { capacity: 0 })
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl From<NonZeroUsize> for Capacity {
    fn from(cap: NonZeroUsize) -> Self {
        Capacity(cap)
    }
}

impl From<Capacity> for usize {
    fn from(cap: Capacity) -> Self {
        cap.get()
    }
}

impl TryFrom<usize> for Capacity {
    type Error = QueueError;

    fn try_from(cap: usize) -> Result<Self, Self::Error> {
        Capacity::new(cap)
    }
}

macro_rules! signed_capacity {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<$ty> for Capacity {
                type Error = QueueError;

                fn try_from(cap: $ty) -> Result<Self, Self::Error> {
                    usize::try_from(cap)
                        .ok()
                        .and_then(NonZeroUsize::new)
                        .map(Capacity)
                        .ok_or(QueueError::InvalidArgument {
                            capacity: cap as i64,
                        })
                }
            }
        )*
    };
}

signed_capacity!(i32, i64, isize);

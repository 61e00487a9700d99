//! Extension trait for lifting plain `Result` values onto a [`Rail`].
//!
//! # Examples
//!
//! ```
//! use rail_pipeline::traits::RailExt;
//!
//! let rail = "21".parse::<i32>().into_rail().chain(|x| Ok(x * 2));
//! assert_eq!(rail.into_result(), Ok(42));
//! ```

use crate::types::Rail;

/// Lifts a `Result` into a [`Rail`] so further stages can be chained onto it.
pub trait RailExt<T, E> {
    /// Wraps `self` in a fresh rail with an empty stage trace.
    fn into_rail(self) -> Rail<T, E>;

    /// Wraps `self` in a rail, recording `name` as the stage that produced it.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_pipeline::traits::RailExt;
    ///
    /// let rail = Err::<(), &str>("boom").into_stage("load");
    /// assert_eq!(rail.completed_stages(), ["load"]);
    /// ```
    fn into_stage(self, name: &'static str) -> Rail<T, E>;
}

impl<T, E> RailExt<T, E> for Result<T, E> {
    #[inline]
    fn into_rail(self) -> Rail<T, E> {
        Rail::new(self)
    }

    #[inline]
    fn into_stage(self, name: &'static str) -> Rail<T, E> {
        Rail::success(()).stage(name, |()| self)
    }
}

use crate::types::{PipelineError, StageTrace};

/// A success-or-failure container that sequences dependent fallible steps.
///
/// `Rail` wraps a `Result` and lets you:
/// - Chain stages with [`chain`](Self::chain) or [`stage`](Self::stage)
/// - Skip every remaining step once a failure has occurred
/// - Record the names of the stages that actually ran
///
/// The first failure travels to the end of the rail untouched: it is never
/// wrapped, replaced or merged with later failures.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The failure type, [`PipelineError`] by default
///
/// # Examples
///
/// ```
/// use rail_pipeline::{PipelineError, Rail};
///
/// let rail = Rail::<u32>::success(5)
///     .chain(|x| Ok(x * 2))
///     .chain(|_| Err::<u32, _>(PipelineError::read("gone.txt")))
///     .chain(|x: u32| Ok(x + 1));
///
/// assert!(rail.is_failure());
/// assert_eq!(rail.error(), Some(&PipelineError::read("gone.txt")));
/// ```
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rail<T, E = PipelineError> {
    result: Result<T, E>,
    trace: StageTrace,
}

impl<T, E> Rail<T, E> {
    /// Creates a rail from an existing `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_pipeline::Rail;
    ///
    /// let rail: Rail<i32, &str> = Rail::new(Err("boom"));
    /// assert!(rail.is_failure());
    /// ```
    #[inline]
    pub fn new(result: Result<T, E>) -> Self {
        Self { result, trace: StageTrace::new() }
    }

    /// Creates a rail holding a success value.
    #[inline]
    pub fn success(value: T) -> Self {
        Self::new(Ok(value))
    }

    /// Creates a rail holding a failure.
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::new(Err(error))
    }

    /// Chains a fallible operation on the success value.
    ///
    /// If the rail holds a success, `f` is invoked with the value and its
    /// result becomes the new rail. If it already holds a failure, `f` is
    /// never called and the failure is carried over unchanged.
    ///
    /// # Arguments
    ///
    /// * `f` - Function applied to the success value
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_pipeline::Rail;
    ///
    /// let rail = Rail::<i32, &str>::success(5).chain(|x| Ok(x * 2));
    /// assert_eq!(rail.into_result(), Ok(10));
    /// ```
    #[inline]
    pub fn chain<U, F>(self, f: F) -> Rail<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        Rail { result: self.result.and_then(f), trace: self.trace }
    }

    /// Like [`chain`](Self::chain), but records `name` in the stage trace
    /// when `f` is actually invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use rail_pipeline::Rail;
    ///
    /// let rail = Rail::<i32, &str>::success(1)
    ///     .stage("first", |x| Ok(x + 1))
    ///     .stage("second", |_| Err::<i32, _>("stop"))
    ///     .stage("third", |x| Ok(x + 1));
    ///
    /// assert_eq!(rail.completed_stages(), ["first", "second"]);
    /// ```
    #[inline]
    pub fn stage<U, F>(mut self, name: &'static str, f: F) -> Rail<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self.result {
            Ok(value) => {
                self.trace.push(name);
                Rail { result: f(value), trace: self.trace }
            },
            Err(e) => Rail { result: Err(e), trace: self.trace },
        }
    }

    /// Transforms the success value; failures pass through unchanged.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Rail<U, E>
    where
        F: FnOnce(T) -> U,
    {
        Rail { result: self.result.map(f), trace: self.trace }
    }

    /// Returns `true` if the rail holds a success value.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Returns `true` if the rail holds a failure.
    #[inline]
    pub fn is_failure(&self) -> bool {
        self.result.is_err()
    }

    /// Returns the success value, or `None` on the failure track.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.result.as_ref().ok()
    }

    /// Returns the failure, or `None` on the success track.
    #[inline]
    pub fn error(&self) -> Option<&E> {
        self.result.as_ref().err()
    }

    /// Borrows the underlying `Result`.
    #[inline]
    pub fn as_result(&self) -> &Result<T, E> {
        &self.result
    }

    /// Names of the stages that ran, in order.
    ///
    /// A stage that failed is included; stages skipped after it are not.
    #[inline]
    pub fn completed_stages(&self) -> &[&'static str] {
        &self.trace
    }

    /// Consumes the rail, returning the underlying `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        self.result
    }
}

impl<T, E> From<Result<T, E>> for Rail<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        Self::new(result)
    }
}

impl<T, E> From<Rail<T, E>> for Result<T, E> {
    #[inline]
    fn from(rail: Rail<T, E>) -> Self {
        rail.result
    }
}

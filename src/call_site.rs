//! Resolving the source location of the assertion in the calling test.
//!
//! Failures are attributed to the line of the test that invoked an assertion,
//! never to the line inside this crate that noticed the violation. Resolution
//! uses Rust's caller-location propagation: [`caller`] is `#[track_caller]`, and
//! so is every frame between it and the public assertion the user called. The
//! location it reads is therefore two frames above its own invocation point,
//! past the single dispatcher frame, at the user's call.
//!
//! Every internal helper placed on that path must also be `#[track_caller]`.
//! A helper without the attribute becomes the reported location and every
//! message silently points at this crate instead of at the test.

use core::{fmt, panic::Location};

/// File name reported when no location is available.
pub const UNKNOWN_FILE: &str = "???";

/// Line reported when no location is available.
pub const UNKNOWN_LINE: u32 = 1;

/// The file and line of an assertion call.
///
/// The file holds only the final path component, so messages stay short:
/// `tests/login.rs` is reported as `login.rs`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CallSite {
    /// File name, without directories.
    pub file: &'static str,
    /// One-based line number.
    pub line: u32,
}

impl CallSite {
    /// Builds a call site from a path, keeping only its final component.
    ///
    /// Both `/` and `\` are treated as separators. An empty file name yields
    /// [`CallSite::unknown`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ghost::CallSite;
    ///
    /// let site = CallSite::from_path("tests/integration/login.rs", 12);
    /// assert_eq!(site.file, "login.rs");
    /// assert_eq!(site.line, 12);
    /// ```
    #[must_use]
    pub fn from_path(path: &'static str, line: u32) -> Self {
        let file = match path.rfind(['/', '\\']) {
            Some(slash) => &path[slash + 1..],
            None => path,
        };
        if file.is_empty() {
            return Self::unknown();
        }
        Self { file, line }
    }

    /// Builds a call site from a captured [`Location`].
    #[must_use]
    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self::from_path(location.file(), location.line())
    }

    /// The sentinel used when resolution fails: `???:1`.
    #[must_use]
    pub const fn unknown() -> Self {
        Self {
            file: UNKNOWN_FILE,
            line: UNKNOWN_LINE,
        }
    }

    /// Returns `true` if this is the [`CallSite::unknown`] sentinel.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.file == UNKNOWN_FILE && self.line == UNKNOWN_LINE
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Returns the file and line two frames above this call.
///
/// Called from a `#[track_caller]` helper, this names the line that called
/// the helper:
///
/// ```
/// use ghost::{CallSite, caller};
///
/// #[track_caller]
/// fn here() -> CallSite {
///     caller()
/// }
///
/// let (site, line) = (here(), line!());
/// assert_eq!(site.line, line);
/// ```
#[must_use]
#[track_caller]
pub fn caller() -> CallSite {
    CallSite::from_location(Location::caller())
}

pub mod util;

#[cfg(test)]
mod numeric;
#[cfg(test)]
mod logging;
#[cfg(all(test, feature = "parallel"))]
mod parallel;

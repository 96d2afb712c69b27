// Want this to be as large as the longest shortest rendering of any type
// that implements Float, which is currently a negative f64 subnormal in
// fixed notation: "-0." followed by 323 zeros and one digit.
pub(crate) const MAX_BUF_LEN: usize = 327;

// "-nan(snan)"
pub(crate) const MAX_NONFINITE_LEN: usize = 10;

// A binary64 has at most 767 significant decimal digits, so any more are
// trailing zeros that general notation trims anyway.
pub(crate) const MAX_GENERAL_PRECISION: usize = 800;

// Room for a general rendering at MAX_GENERAL_PRECISION in either notation:
// "0.0000" plus the digits, or the digits plus ".e+308".
pub(crate) const GENERAL_SCRATCH_LEN: usize = 832;

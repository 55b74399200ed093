/// Default relative tolerance used to decide that two eigenvalues of C are equal
pub const DEFAULT_TOL_EQUAL_EIGENVALUES: f64 = 1e-14;

/// Relative spread of three eigenvalues below which the second divided difference
/// of the half-logarithm is replaced by its confluent limit at the mean value
///
/// The neglected term is of the order of the squared spread.
pub const TOL_CONFLUENT_SECOND_DIFFERENCE: f64 = 1e-5;

/// Defines an auxiliary directory where the test result files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/logstrain/test";

/// Ports module defining the interfaces of the hexagon
///
/// The application core only talks to the outside world through the
/// outbound (driven) ports declared here.
pub mod outbound;

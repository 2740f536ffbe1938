pub mod chart;
pub mod composition;
pub mod ipo;

pub mod anchor;
pub mod angular_sort;
pub mod graham_scan;

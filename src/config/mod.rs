pub mod hough;

pub mod raw_trip;

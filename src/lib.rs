// topic-report: summary reports for trained topic models
//
// This is the library root. The model module is the read-only seam to the
// estimation engine; the report module turns a model into output.

pub mod config;
pub mod error;
pub mod model;
pub mod report;

pub mod charity_report_routine;
pub mod report_publisher;

#[cfg(test)]
pub(crate) mod test_support;

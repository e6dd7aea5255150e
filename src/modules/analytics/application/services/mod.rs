mod brand_report_service;
mod creator_report_service;

#[cfg(test)]
pub(crate) mod test_doubles;

pub use brand_report_service::BrandReportService;
pub use creator_report_service::CreatorReportService;

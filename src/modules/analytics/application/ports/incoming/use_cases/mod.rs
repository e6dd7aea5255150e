mod reports;

pub use reports::{
    BrandReportError, BrandReportUseCase, CreatorReportError, CreatorReportUseCase,
};

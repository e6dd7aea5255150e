mod reports;

pub use reports::{
    brand_report_handler, __path_brand_report_handler, creator_report_handler,
    __path_creator_report_handler,
};

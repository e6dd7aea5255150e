mod image_host_reqwest;

pub use image_host_reqwest::ReqwestImageHost;

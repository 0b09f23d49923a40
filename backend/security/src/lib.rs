pub mod origin;

pub use origin::{
    OriginPattern, OriginPolicy, Rejection, RequestOrigin, XHR_SENTINEL, is_http_url,
    origin_matches,
};

mod blob;

pub use blob::{
    point_exclusions_blob_name, state_exclusions_blob_name, BlobContainerClient,
    DEFAULT_ACCOUNT_URL, DEFAULT_CONTAINER,
};

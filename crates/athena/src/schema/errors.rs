//! Bodies of the failures Athena reports.

use schemata_core::{FieldDescriptor as F, ShapeDescriptor, ShapeRole};

use crate::types::ThrottleReason;

pub static INTERNAL_SERVER_EXCEPTION: ShapeDescriptor = ShapeDescriptor {
    name: "InternalServerException",
    role: ShapeRole::Error,
    fields: &[F::string("Message")],
};

pub static INVALID_REQUEST_EXCEPTION: ShapeDescriptor = ShapeDescriptor {
    name: "InvalidRequestException",
    role: ShapeRole::Error,
    fields: &[F::string("Message"), F::string("AthenaErrorCode").length(1, 256)],
};

pub static METADATA_EXCEPTION: ShapeDescriptor = ShapeDescriptor {
    name: "MetadataException",
    role: ShapeRole::Error,
    fields: &[F::string("Message")],
};

pub static RESOURCE_NOT_FOUND_EXCEPTION: ShapeDescriptor = ShapeDescriptor {
    name: "ResourceNotFoundException",
    role: ShapeRole::Error,
    fields: &[F::string("Message"), F::string("ResourceName").length(1, 1024)],
};

pub static TOO_MANY_REQUESTS_EXCEPTION: ShapeDescriptor = ShapeDescriptor {
    name: "TooManyRequestsException",
    role: ShapeRole::Error,
    fields: &[
        F::string("Message"),
        F::enumeration("Reason", &ThrottleReason::DESCRIPTOR),
    ],
};

use schemata_core::{wire_enum, ElementKind, FieldDescriptor as F, ShapeDescriptor, ShapeRole};

wire_enum! {
    pub enum Priority {
        Low => "LOW",
        High => "HIGH",
    }
}

pub static DATUM: ShapeDescriptor = ShapeDescriptor {
    name: "Datum",
    role: ShapeRole::Structure,
    fields: &[F::string("VarCharValue")],
};

pub static ROW: ShapeDescriptor = ShapeDescriptor {
    name: "Row",
    role: ShapeRole::Structure,
    fields: &[F::list("Data", ElementKind::Structure(&DATUM))],
};

pub static SUBMIT_REQUEST: ShapeDescriptor = ShapeDescriptor {
    name: "SubmitJobRequest",
    role: ShapeRole::Request { operation: "SubmitJob" },
    fields: &[
        F::string("JobName").required().length(1, 64).pattern("[a-z][a-z0-9-]*"),
        F::enumeration("Priority", &Priority::DESCRIPTOR),
        F::integer("Retries").range(0, 5),
        F::boolean("DryRun"),
        F::double("Weight"),
        F::timestamp("NotBefore"),
        F::list("Labels", ElementKind::String).max_len(10),
        F::map("Env", ElementKind::String),
        F::list("Rows", ElementKind::Structure(&ROW)),
    ],
};

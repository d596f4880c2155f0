//! Per-entity rule tables.
//!
//! One static table per resource, applied identically to create and update
//! (updates are full replacements, so omission fails `Required` like any
//! other missing field). Reference fields carry `Min(1)`: they must be
//! positive integers, but whether the referenced row exists is left to the
//! storage layer.

use super::rules::{FieldRules, Rule};

pub const CLIENT: &[FieldRules] = &[
    FieldRules {
        field: "name",
        rules: &[Rule::Required, Rule::Text, Rule::Max(100)],
    },
    FieldRules {
        field: "address",
        rules: &[Rule::Required, Rule::Text, Rule::Max(100)],
    },
    FieldRules {
        field: "postcode",
        rules: &[Rule::Required, Rule::Text, Rule::Max(10)],
    },
    FieldRules {
        field: "city",
        rules: &[Rule::Required, Rule::Text, Rule::Max(50)],
    },
    FieldRules {
        field: "country",
        rules: &[Rule::Required, Rule::Text, Rule::Max(50)],
    },
];

pub const CONTACT: &[FieldRules] = &[
    FieldRules {
        field: "firstname",
        rules: &[Rule::Required, Rule::Text, Rule::Max(50)],
    },
    FieldRules {
        field: "lastname",
        rules: &[Rule::Required, Rule::Text, Rule::Max(80)],
    },
    FieldRules {
        field: "email",
        rules: &[Rule::Required, Rule::Text, Rule::Email, Rule::Max(80)],
    },
    FieldRules {
        field: "phone",
        rules: &[Rule::Required, Rule::Text, Rule::Max(30)],
    },
    FieldRules {
        field: "id_client",
        rules: &[Rule::Required, Rule::Integer, Rule::Min(1)],
    },
];

pub const STATUS: &[FieldRules] = &[FieldRules {
    field: "name",
    rules: &[Rule::Required, Rule::Text, Rule::Max(20)],
}];

pub const ASSIGNMENT: &[FieldRules] = &[
    FieldRules {
        field: "work_description",
        rules: &[Rule::Required, Rule::Text, Rule::Max(200)],
    },
    FieldRules {
        field: "developer_description",
        rules: &[Rule::Required, Rule::Text, Rule::Max(200)],
    },
    FieldRules {
        field: "id_clients",
        rules: &[Rule::Required, Rule::Integer, Rule::Min(1)],
    },
    FieldRules {
        field: "id_statuses",
        rules: &[Rule::Required, Rule::Integer, Rule::Min(1)],
    },
];

pub const ACTIVITY: &[FieldRules] = &[
    FieldRules {
        field: "title",
        rules: &[Rule::Required, Rule::Text, Rule::Max(50)],
    },
    FieldRules {
        field: "start_time",
        rules: &[Rule::Required, Rule::DateTime],
    },
    FieldRules {
        field: "end_time",
        rules: &[Rule::Required, Rule::DateTime],
    },
    FieldRules {
        field: "comment",
        rules: &[Rule::Required, Rule::Text],
    },
    FieldRules {
        field: "id_assignments",
        rules: &[Rule::Required, Rule::Integer, Rule::Min(1)],
    },
];

pub const USER: &[FieldRules] = &[
    FieldRules {
        field: "firstname",
        rules: &[Rule::Required, Rule::Text, Rule::Max(50)],
    },
    FieldRules {
        field: "lastname",
        rules: &[Rule::Required, Rule::Text, Rule::Max(80)],
    },
    FieldRules {
        field: "username",
        rules: &[Rule::Required, Rule::Text, Rule::Unique, Rule::Max(45)],
    },
    FieldRules {
        field: "email",
        rules: &[Rule::Required, Rule::Text, Rule::Email, Rule::Unique, Rule::Max(80)],
    },
    FieldRules {
        field: "password",
        rules: &[Rule::Required, Rule::Text, Rule::Min(6), Rule::Max(150)],
    },
    FieldRules {
        field: "id_users_roles",
        rules: &[Rule::Required, Rule::Integer, Rule::Min(1)],
    },
];

pub const USER_ROLE: &[FieldRules] = &[FieldRules {
    field: "role",
    rules: &[Rule::Required, Rule::Text, Rule::Max(50)],
}];

pub const USER_ASSIGNMENT: &[FieldRules] = &[
    FieldRules {
        field: "id_users",
        rules: &[Rule::Required, Rule::Integer, Rule::Min(1)],
    },
    FieldRules {
        field: "id_assignments",
        rules: &[Rule::Required, Rule::Integer, Rule::Min(1)],
    },
];

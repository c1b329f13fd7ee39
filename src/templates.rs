//! Static catalog of predefined schema templates.
//!
//! Read-only registry built once at first use and never mutated. Templates
//! are ready-made ERD models fed straight to the generator.

use crate::model::{Column, ErdModel, Position, Table};
use crate::sql::infer_relationships;
use std::collections::HashMap;
use std::sync::LazyLock;

static TEMPLATES: LazyLock<HashMap<&'static str, ErdModel>> = LazyLock::new(|| {
    let mut catalog = HashMap::new();
    catalog.insert("blog", blog());
    catalog.insert("ecommerce", ecommerce());
    catalog
});

/// Look up a template by name.
pub fn template(name: &str) -> Option<ErdModel> {
    TEMPLATES.get(name).cloned()
}

/// All template names, sorted.
pub fn template_names() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = TEMPLATES.keys().copied().collect();
    names.sort_unstable();
    names
}

fn model(tables: Vec<Table>) -> ErdModel {
    let relationships = infer_relationships(&tables);
    ErdModel {
        tables,
        relationships,
    }
}

fn table(name: &str, columns: Vec<Column>, x: f64, y: f64) -> Table {
    Table {
        name: name.to_string(),
        columns,
        position: Some(Position { x, y }),
    }
}

fn col(name: &str, typ: &str) -> Column {
    Column {
        name: name.to_string(),
        typ: typ.to_string(),
        nullable: true,
        primary_key: false,
        foreign_key: None,
        unique: false,
        default: None,
    }
}

fn pk(name: &str, typ: &str) -> Column {
    Column {
        nullable: false,
        primary_key: true,
        ..col(name, typ)
    }
}

fn required(name: &str, typ: &str) -> Column {
    Column {
        nullable: false,
        ..col(name, typ)
    }
}

fn fk(name: &str, typ: &str, target: &str) -> Column {
    Column {
        nullable: false,
        foreign_key: Some(target.to_string()),
        ..col(name, typ)
    }
}

fn timestamp_col(name: &str) -> Column {
    Column {
        default: Some("CURRENT_TIMESTAMP".to_string()),
        ..col(name, "TIMESTAMP")
    }
}

fn blog() -> ErdModel {
    model(vec![
        table(
            "users",
            vec![
                pk("id", "INTEGER"),
                Column {
                    unique: true,
                    ..required("username", "VARCHAR(50)")
                },
                Column {
                    unique: true,
                    ..required("email", "VARCHAR(255)")
                },
                timestamp_col("created_at"),
            ],
            40.0,
            40.0,
        ),
        table(
            "posts",
            vec![
                pk("id", "INTEGER"),
                fk("user_id", "INTEGER", "users(id)"),
                required("title", "VARCHAR(200)"),
                col("body", "TEXT"),
                Column {
                    default: Some("FALSE".to_string()),
                    ..col("published", "BOOLEAN")
                },
                timestamp_col("created_at"),
            ],
            360.0,
            40.0,
        ),
        table(
            "comments",
            vec![
                pk("id", "INTEGER"),
                fk("post_id", "INTEGER", "posts(id)"),
                fk("user_id", "INTEGER", "users(id)"),
                required("body", "TEXT"),
                timestamp_col("created_at"),
            ],
            680.0,
            40.0,
        ),
    ])
}

fn ecommerce() -> ErdModel {
    model(vec![
        table(
            "customers",
            vec![
                pk("id", "INTEGER"),
                required("name", "VARCHAR(120)"),
                Column {
                    unique: true,
                    ..required("email", "VARCHAR(255)")
                },
                timestamp_col("created_at"),
            ],
            40.0,
            40.0,
        ),
        table(
            "products",
            vec![
                pk("id", "INTEGER"),
                required("name", "VARCHAR(200)"),
                required("price", "DECIMAL(10,2)"),
                Column {
                    default: Some("0".to_string()),
                    ..required("stock", "INTEGER")
                },
            ],
            40.0,
            320.0,
        ),
        table(
            "orders",
            vec![
                pk("id", "INTEGER"),
                fk("customer_id", "INTEGER", "customers(id)"),
                Column {
                    default: Some("'PENDING'".to_string()),
                    ..required("status", "VARCHAR(20)")
                },
                required("total", "DECIMAL(10,2)"),
                timestamp_col("created_at"),
            ],
            360.0,
            40.0,
        ),
        table(
            "order_items",
            vec![
                pk("id", "INTEGER"),
                fk("order_id", "INTEGER", "orders(id)"),
                fk("product_id", "INTEGER", "products(id)"),
                Column {
                    default: Some("1".to_string()),
                    ..required("quantity", "INTEGER")
                },
                required("unit_price", "DECIMAL(10,2)"),
            ],
            360.0,
            320.0,
        ),
    ])
}

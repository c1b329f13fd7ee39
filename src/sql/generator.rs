//! Render an ERD model back into SQL DDL.
//!
//! Foreign-key constraints are re-derived from each table's columns, not
//! from the model's relationship list, so generation stays correct even when
//! the two disagree.

use super::dialect::Dialect;
use super::parser::fk_parts;
use super::types::postgres_type;
use crate::model::{Column, ErdModel, Table};

const POSTGRES_HEADER: &str = "-- PostgreSQL schema\n-- Generated from ERD model";

/// Render the model as DDL for the given dialect.
pub fn generate_sql(model: &ErdModel, dialect: Dialect) -> String {
    match dialect {
        Dialect::Generic => generate_generic(model),
        Dialect::PostgreSQL => generate_postgres(model),
    }
}

fn generate_generic(model: &ErdModel) -> String {
    let mut statements = Vec::new();

    for table in &model.tables {
        statements.push(render_create_table(table, Dialect::Generic));
    }

    for table in &model.tables {
        for column in &table.columns {
            let Some((ref_table, ref_column)) =
                column.foreign_key.as_deref().and_then(fk_parts)
            else {
                continue;
            };
            statements.push(format!(
                "ALTER TABLE {} ADD CONSTRAINT fk_{}_{} FOREIGN KEY ({}) REFERENCES {}({});",
                table.name, table.name, column.name, column.name, ref_table, ref_column
            ));
        }
    }

    statements.join("\n\n")
}

fn generate_postgres(model: &ErdModel) -> String {
    let mut statements = vec![POSTGRES_HEADER.to_string()];

    for table in &model.tables {
        statements.push(render_create_table(table, Dialect::PostgreSQL));
    }

    for table in &model.tables {
        for column in &table.columns {
            let Some((ref_table, ref_column)) =
                column.foreign_key.as_deref().and_then(fk_parts)
            else {
                continue;
            };
            statements.push(format!(
                "ALTER TABLE {}\n    ADD CONSTRAINT fk_{}_{}\n    FOREIGN KEY ({})\n    REFERENCES {}({})\n    ON DELETE RESTRICT;",
                table.name,
                table.name,
                column.name,
                column.name,
                ref_table.to_lowercase(),
                ref_column.to_lowercase()
            ));
        }
    }

    // FK columns are always indexed; fixed policy, not configurable
    for table in &model.tables {
        for column in &table.columns {
            if column.foreign_key.as_deref().and_then(fk_parts).is_none() {
                continue;
            }
            statements.push(format!(
                "CREATE INDEX idx_{}_{} ON {} ({});",
                table.name, column.name, table.name, column.name
            ));
        }
    }

    statements.join("\n\n")
}

fn render_create_table(table: &Table, dialect: Dialect) -> String {
    let columns: Vec<String> = table
        .columns
        .iter()
        .map(|column| render_column(column, dialect))
        .collect();
    format!(
        "CREATE TABLE {} (\n    {}\n);",
        table.name,
        columns.join(",\n    ")
    )
}

fn render_column(column: &Column, dialect: Dialect) -> String {
    let typ = match dialect {
        Dialect::Generic => column.typ.clone(),
        Dialect::PostgreSQL => postgres_type(&column.typ, column.primary_key),
    };

    let mut rendered = format!("{} {}", column.name, typ);
    if !column.nullable {
        rendered.push_str(" NOT NULL");
    }
    if column.primary_key {
        rendered.push_str(" PRIMARY KEY");
    }
    // PRIMARY KEY already implies uniqueness
    if column.unique && !column.primary_key {
        rendered.push_str(" UNIQUE");
    }
    if let Some(default) = &column.default {
        let default = match dialect {
            Dialect::PostgreSQL if default.eq_ignore_ascii_case("CURRENT_TIMESTAMP") => {
                "CURRENT_TIMESTAMP"
            }
            _ => default.as_str(),
        };
        rendered.push_str(" DEFAULT ");
        rendered.push_str(default);
    }
    rendered
}

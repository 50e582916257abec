use crate::schema::{ColumnType, TableSchema};

/// Generate CREATE TABLE SQL for a table schema
pub fn generate_create_table(schema: &TableSchema) -> String {
    let mut sql = format!("CREATE TABLE {} (\n", schema.name);

    let columns: Vec<String> = schema
        .columns
        .iter()
        .map(|col| {
            let sql_type = match col.col_type {
                ColumnType::Integer => "INTEGER",
                ColumnType::Text => "TEXT",
            };
            format!("    \"{}\" {} NOT NULL", col.name, sql_type)
        })
        .collect();

    sql.push_str(&columns.join(",\n"));
    sql.push_str("\n)");

    sql
}

/// Generate CREATE INDEX statements for the schema's lookup indexes.
/// Text lookups in the catalog ignore case, so the indexes do too.
pub fn generate_indexes(schema: &TableSchema) -> Vec<String> {
    schema
        .indexes
        .iter()
        .map(|index| {
            let columns: Vec<String> = index
                .columns
                .iter()
                .map(|c| format!("\"{}\" COLLATE NOCASE", c))
                .collect();
            format!(
                "CREATE INDEX idx_{}_{} ON {}({})",
                schema.name,
                index.columns.join("_"),
                schema.name,
                columns.join(", ")
            )
        })
        .collect()
}

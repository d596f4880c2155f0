use sqlx::PgPool;

/// All `id` columns must be bigint.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_pks_are_bigint(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, data_type
         FROM information_schema.columns
         WHERE column_name = 'id'
           AND table_schema = 'public'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!rows.is_empty(), "schema should define entity tables");
    for (table, data_type) in &rows {
        assert_eq!(
            data_type, "bigint",
            "Table {table}.id should be bigint, got {data_type}"
        );
    }
}

/// Every table (except _sqlx_migrations) must have created_at, updated_at,
/// and deleted_at as timestamptz.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_tables_have_audit_columns(pool: PgPool) {
    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT table_name
         FROM information_schema.tables
         WHERE table_schema = 'public'
           AND table_type = 'BASE TABLE'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    for (table,) in &tables {
        for col in ["created_at", "updated_at", "deleted_at"] {
            let result: Option<(String,)> = sqlx::query_as(&format!(
                "SELECT data_type
                 FROM information_schema.columns
                 WHERE table_schema = 'public'
                   AND table_name = '{table}'
                   AND column_name = '{col}'"
            ))
            .fetch_optional(&pool)
            .await
            .unwrap();

            let (data_type,) =
                result.unwrap_or_else(|| panic!("Table {table} is missing column {col}"));
            assert_eq!(
                data_type, "timestamp with time zone",
                "Table {table}.{col} should be timestamptz, got {data_type}"
            );
        }
    }
}

/// No character varying columns should exist — TEXT is preferred.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_no_varchar_columns(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, column_name
         FROM information_schema.columns
         WHERE table_schema = 'public'
           AND data_type = 'character varying'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name, column_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(
        rows.is_empty(),
        "Found VARCHAR columns (should use TEXT): {:?}",
        rows
    );
}

/// Every reference column must have an index (there are no FK constraints,
/// so the filter columns carry plain indexes instead).
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reference_columns_are_indexed(pool: PgPool) {
    let reference_columns = [
        ("contacts", "id_client"),
        ("assignments", "id_clients"),
        ("assignments", "id_statuses"),
        ("activities", "id_assignments"),
        ("users", "id_users_roles"),
        ("users_assignments", "id_users"),
        ("users_assignments", "id_assignments"),
    ];

    for (table, column) in reference_columns {
        let indexed: bool = sqlx::query_scalar(
            "SELECT EXISTS (
                SELECT 1
                FROM pg_indexes
                WHERE schemaname = 'public'
                  AND tablename = $1
                  AND indexdef LIKE '%(' || $2 || ')%'
             )",
        )
        .bind(table)
        .bind(column)
        .fetch_one(&pool)
        .await
        .unwrap();

        assert!(indexed, "{table}.{column} should be indexed");
    }
}

/// The user uniqueness indexes are partial: they cover active rows only.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_unique_indexes_are_partial(pool: PgPool) {
    for index in ["uq_users_username", "uq_users_email"] {
        let definition: Option<String> = sqlx::query_scalar(
            "SELECT indexdef FROM pg_indexes
             WHERE schemaname = 'public' AND indexname = $1",
        )
        .bind(index)
        .fetch_optional(&pool)
        .await
        .unwrap();

        let definition = definition.unwrap_or_else(|| panic!("{index} should exist"));
        assert!(
            definition.contains("deleted_at IS NULL"),
            "{index} should be scoped to active rows: {definition}"
        );
    }
}

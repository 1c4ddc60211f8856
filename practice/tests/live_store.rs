//! Integration tests against a live practice store. They run only when
//! SQLCAMP_TEST_DATABASE_URL points at a MySQL database that may be seeded
//! with the demo tables; without it every test skips and passes.

use sqlcamp_practice::config::DatabaseConfig;
use sqlcamp_practice::database::PracticeDatabase;
use sqlcamp_practice::executor::QueryOutcome;
use sqlcamp_practice::gateway::PracticeGateway;
use std::sync::Arc;
use std::time::Duration;

fn test_database_config() -> Option<DatabaseConfig> {
    let url = std::env::var("SQLCAMP_TEST_DATABASE_URL").ok()?;
    Some(DatabaseConfig {
        url,
        max_connections: 5,
        acquire_timeout_secs: 5,
        query_timeout_secs: 10,
    })
}

async fn seeded_gateway(config: &DatabaseConfig) -> PracticeGateway {
    let database = PracticeDatabase::connect(config)
        .await
        .expect("connect practice store");
    database.seed().await.expect("seed practice store");
    PracticeGateway::new(database, Duration::from_secs(config.query_timeout_secs))
}

#[tokio::test]
async fn test_select_with_limit_returns_seeded_employees() {
    let Some(config) = test_database_config() else {
        eprintln!("SQLCAMP_TEST_DATABASE_URL not set, skipping");
        return;
    };
    let gateway = seeded_gateway(&config).await;

    match gateway
        .run_query("SELECT * FROM employees LIMIT 10;")
        .await
        .expect("store reachable")
    {
        QueryOutcome::Success { rows, row_count } => {
            assert!(row_count <= 10);
            assert_eq!(rows.len(), row_count);
            assert!(!rows.is_empty());
            for column in [
                "id",
                "name",
                "email",
                "department",
                "salary",
                "hire_date",
                "manager_id",
            ] {
                assert!(
                    rows[0].contains_key(column),
                    "missing column in result row: {column}"
                );
            }
        }
        QueryOutcome::Failure { message } => panic!("seeded query failed: {message}"),
    }

    gateway.close().await;
}

#[tokio::test]
async fn test_unknown_table_fails_with_store_message() {
    let Some(config) = test_database_config() else {
        eprintln!("SQLCAMP_TEST_DATABASE_URL not set, skipping");
        return;
    };
    let gateway = seeded_gateway(&config).await;

    match gateway
        .run_query("SELECT * FROM nonexistent_table;")
        .await
        .expect("store reachable")
    {
        QueryOutcome::Failure { message } => assert!(!message.is_empty()),
        QueryOutcome::Success { .. } => panic!("query against missing table must fail"),
    }

    gateway.close().await;
}

#[tokio::test]
async fn test_schema_describes_every_seeded_table() {
    let Some(config) = test_database_config() else {
        eprintln!("SQLCAMP_TEST_DATABASE_URL not set, skipping");
        return;
    };
    let gateway = seeded_gateway(&config).await;

    let schema = gateway.get_schema().await.expect("schema fetch");

    for table in ["employees", "departments", "products", "orders"] {
        let descriptors = schema
            .get(table)
            .unwrap_or_else(|| panic!("schema missing table: {table}"));
        assert!(!descriptors.is_empty());
        assert!(
            descriptors.iter().any(|descriptor| descriptor.key == "PRI"),
            "table {table} has no primary key descriptor"
        );
        for descriptor in descriptors {
            assert!(!descriptor.field.is_empty());
            assert!(!descriptor.column_type.is_empty());
        }
    }

    gateway.close().await;
}

#[tokio::test]
async fn test_every_catalog_sample_runs_against_the_seeded_schema() {
    let Some(config) = test_database_config() else {
        eprintln!("SQLCAMP_TEST_DATABASE_URL not set, skipping");
        return;
    };
    let gateway = seeded_gateway(&config).await;

    for sample in gateway.get_samples() {
        match gateway
            .run_query(&sample.query)
            .await
            .expect("store reachable")
        {
            QueryOutcome::Success { .. } => {}
            QueryOutcome::Failure { message } => {
                panic!("catalog entry '{}' failed: {message}", sample.title)
            }
        }
    }

    gateway.close().await;
}

#[tokio::test]
async fn test_callers_beyond_the_pool_ceiling_queue_instead_of_failing() {
    let Some(mut config) = test_database_config() else {
        eprintln!("SQLCAMP_TEST_DATABASE_URL not set, skipping");
        return;
    };
    config.max_connections = 2;

    let gateway = Arc::new(seeded_gateway(&config).await);

    let mut handles = Vec::new();
    for _ in 0..8 {
        let gateway = Arc::clone(&gateway);
        handles.push(tokio::spawn(async move {
            gateway.run_query("SELECT COUNT(*) AS n FROM employees;").await
        }));
    }

    for handle in handles {
        let outcome = handle.await.expect("task completed").expect("no connectivity error");
        assert!(
            matches!(outcome, QueryOutcome::Success { .. }),
            "queued caller should complete once a slot frees"
        );
    }

    gateway.close().await;
}

use crate::config::DatabaseConfig;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use std::time::Duration;

/// Pooled handle to the practice store. Constructed once at startup and
/// passed into the gateway explicitly; closed at shutdown.
#[derive(Clone)]
pub struct PracticeDatabase {
    pool: MySqlPool,
}

impl PracticeDatabase {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect(&config.url)
            .await?;

        Ok(PracticeDatabase { pool })
    }

    /// Builds the pool without touching the network. Used by tests exercising
    /// paths that never reach the store.
    pub fn connect_lazy(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect_lazy(&config.url)?;

        Ok(PracticeDatabase { pool })
    }

    /// Creates the demo tables and inserts the sample rows. Idempotent:
    /// `CREATE TABLE IF NOT EXISTS` plus `INSERT IGNORE`, so re-running
    /// neither duplicates rows nor errors. Practice queries never mutate this
    /// data, since only read-oriented statement keywords are admitted.
    pub async fn seed(&self) -> Result<(), sqlx::Error> {
        sqlx::raw_sql(
            r#"
            CREATE TABLE IF NOT EXISTS employees (
                id INT AUTO_INCREMENT PRIMARY KEY,
                name VARCHAR(100) NOT NULL,
                email VARCHAR(100) NOT NULL,
                department VARCHAR(50) NOT NULL,
                salary DECIMAL(10,2) NOT NULL,
                hire_date DATE NOT NULL,
                manager_id INT,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::raw_sql(
            r#"
            CREATE TABLE IF NOT EXISTS departments (
                id INT AUTO_INCREMENT PRIMARY KEY,
                name VARCHAR(50) NOT NULL,
                budget DECIMAL(12,2) NOT NULL,
                location VARCHAR(100) NOT NULL,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::raw_sql(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id INT AUTO_INCREMENT PRIMARY KEY,
                name VARCHAR(100) NOT NULL,
                category VARCHAR(50) NOT NULL,
                price DECIMAL(8,2) NOT NULL,
                stock_quantity INT NOT NULL,
                supplier_id INT,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::raw_sql(
            r#"
            CREATE TABLE IF NOT EXISTS orders (
                id INT AUTO_INCREMENT PRIMARY KEY,
                customer_name VARCHAR(100) NOT NULL,
                product_id INT NOT NULL,
                quantity INT NOT NULL,
                order_date DATE NOT NULL,
                total_amount DECIMAL(10,2) NOT NULL,
                status VARCHAR(20) DEFAULT 'pending',
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::raw_sql(
            r#"
            INSERT IGNORE INTO employees (id, name, email, department, salary, hire_date, manager_id) VALUES
            (1, 'John Doe', 'john@company.com', 'Engineering', 75000.00, '2022-01-15', NULL),
            (2, 'Jane Smith', 'jane@company.com', 'Marketing', 65000.00, '2022-02-20', NULL),
            (3, 'Mike Johnson', 'mike@company.com', 'Engineering', 80000.00, '2021-11-10', 1),
            (4, 'Sarah Wilson', 'sarah@company.com', 'HR', 60000.00, '2023-03-05', NULL),
            (5, 'Tom Brown', 'tom@company.com', 'Sales', 55000.00, '2022-08-12', 2),
            (6, 'Lisa Davis', 'lisa@company.com', 'Engineering', 72000.00, '2023-01-18', 1),
            (7, 'Chris Miller', 'chris@company.com', 'Marketing', 58000.00, '2022-12-03', 2),
            (8, 'Anna Garcia', 'anna@company.com', 'Finance', 68000.00, '2021-09-25', NULL)
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::raw_sql(
            r#"
            INSERT IGNORE INTO departments (id, name, budget, location) VALUES
            (1, 'Engineering', 500000.00, 'Building A'),
            (2, 'Marketing', 200000.00, 'Building B'),
            (3, 'HR', 150000.00, 'Building C'),
            (4, 'Sales', 300000.00, 'Building B'),
            (5, 'Finance', 250000.00, 'Building C')
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::raw_sql(
            r#"
            INSERT IGNORE INTO products (id, name, category, price, stock_quantity, supplier_id) VALUES
            (1, 'Laptop Pro', 'Electronics', 1299.99, 50, 1),
            (2, 'Wireless Mouse', 'Electronics', 29.99, 200, 1),
            (3, 'Office Chair', 'Furniture', 199.99, 30, 2),
            (4, 'Desk Lamp', 'Furniture', 49.99, 75, 2),
            (5, 'Notebook Set', 'Office Supplies', 15.99, 100, 3),
            (6, 'Pen Pack', 'Office Supplies', 8.99, 150, 3),
            (7, 'Monitor 24inch', 'Electronics', 299.99, 25, 1),
            (8, 'Keyboard Mechanical', 'Electronics', 89.99, 40, 1)
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::raw_sql(
            r#"
            INSERT IGNORE INTO orders (id, customer_name, product_id, quantity, order_date, total_amount, status) VALUES
            (1, 'Alice Johnson', 1, 2, '2024-01-15', 2599.98, 'completed'),
            (2, 'Bob Smith', 3, 1, '2024-01-20', 199.99, 'completed'),
            (3, 'Carol Davis', 2, 5, '2024-02-01', 149.95, 'shipped'),
            (4, 'David Wilson', 7, 1, '2024-02-05', 299.99, 'pending'),
            (5, 'Eva Brown', 5, 3, '2024-02-10', 47.97, 'completed'),
            (6, 'Frank Miller', 8, 2, '2024-02-12', 179.98, 'shipped'),
            (7, 'Grace Lee', 4, 4, '2024-02-15', 199.96, 'pending'),
            (8, 'Henry Garcia', 6, 10, '2024-02-18', 89.90, 'completed')
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

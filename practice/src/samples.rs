use sqlcamp_types::SampleQuery;

/// Hard-coded example queries shown in the practice editor. The catalog is
/// fixed for the lifetime of the process and every entry must run cleanly
/// against the seeded practice schema.
pub fn sample_queries() -> Vec<SampleQuery> {
    vec![
        SampleQuery {
            title: "Basic SELECT".to_string(),
            query: "SELECT * FROM employees;".to_string(),
            description: "Select all employees".to_string(),
        },
        SampleQuery {
            title: "WHERE Clause".to_string(),
            query: "SELECT name, salary FROM employees WHERE salary > 70000;".to_string(),
            description: "Find employees with salary greater than 70000".to_string(),
        },
        SampleQuery {
            title: "ORDER BY".to_string(),
            query: "SELECT name, hire_date FROM employees ORDER BY hire_date DESC;".to_string(),
            description: "List employees by hire date (newest first)".to_string(),
        },
        SampleQuery {
            title: "GROUP BY with COUNT".to_string(),
            query: "SELECT department, COUNT(*) as employee_count FROM employees GROUP BY department;"
                .to_string(),
            description: "Count employees by department".to_string(),
        },
        SampleQuery {
            title: "JOIN Tables".to_string(),
            query: "SELECT o.customer_name, p.name, o.quantity FROM orders o JOIN products p ON o.product_id = p.id;"
                .to_string(),
            description: "Join orders with products".to_string(),
        },
        SampleQuery {
            title: "Aggregate Functions".to_string(),
            query: "SELECT AVG(salary) as avg_salary, MIN(salary) as min_salary, MAX(salary) as max_salary FROM employees;"
                .to_string(),
            description: "Calculate salary statistics".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gatekeeper::{classify, Verdict};

    #[test]
    fn test_catalog_entries_are_complete() {
        let queries = sample_queries();
        assert!(!queries.is_empty());
        for sample in &queries {
            assert!(!sample.title.is_empty());
            assert!(!sample.query.is_empty());
            assert!(!sample.description.is_empty());
        }
    }

    #[test]
    fn test_catalog_is_stable_across_calls() {
        assert_eq!(sample_queries(), sample_queries());
    }

    #[test]
    fn test_every_sample_passes_the_gate() {
        for sample in sample_queries() {
            assert_eq!(
                classify(&sample.query),
                Verdict::Allowed,
                "catalog entry must be runnable: {}",
                sample.title
            );
        }
    }
}

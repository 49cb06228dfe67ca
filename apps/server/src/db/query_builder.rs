//! SQL query builder for drug listings.
//!
//! Builds the page query and the matching count query from one filter so the
//! two always agree on which rows qualify.

use super::traits::{DrugFilter, DrugSort};

pub(crate) const DRUG_COLUMNS: &str =
    "id, code, generic_name, brand_name, company, launch_date, created_at, updated_at";

/// Bind values for `sqlx` queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Text(String),
    Int(i64),
}

#[derive(Debug, Clone)]
pub struct DrugQueryBuilder<'a> {
    filter: &'a DrugFilter,
    sort: Option<DrugSort>,
    skip: u64,
    limit: Option<u64>,
}

impl<'a> DrugQueryBuilder<'a> {
    pub fn new(filter: &'a DrugFilter) -> Self {
        Self {
            filter,
            sort: None,
            skip: 0,
            limit: None,
        }
    }

    pub fn sort(mut self, sort: DrugSort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn page(mut self, skip: u64, limit: u64) -> Self {
        self.skip = skip;
        self.limit = Some(limit);
        self
    }

    /// `SELECT` of the requested page.
    pub fn build_sql(&self) -> (String, Vec<BindValue>) {
        let mut binds = Vec::new();
        let mut sql = format!("SELECT {DRUG_COLUMNS} FROM drugs");
        self.push_where(&mut sql, &mut binds);

        sql.push_str(" ORDER BY ");
        if let Some(sort) = self.sort {
            sql.push_str(sort.column.column_name());
            if sort.column.is_text() {
                sql.push_str(" COLLATE \"C\"");
            }
            sql.push_str(if sort.ascending { " ASC" } else { " DESC" });
            sql.push_str(", ");
        }
        sql.push_str("id ASC");

        if self.skip > 0 {
            binds.push(BindValue::Int(to_i64(self.skip)));
            sql.push_str(&format!(" OFFSET ${}", binds.len()));
        }
        if let Some(limit) = self.limit {
            binds.push(BindValue::Int(to_i64(limit)));
            sql.push_str(&format!(" LIMIT ${}", binds.len()));
        }

        (sql, binds)
    }

    /// `SELECT COUNT(*)` over the same filter, without ordering or paging.
    pub fn build_count_sql(&self) -> (String, Vec<BindValue>) {
        let mut binds = Vec::new();
        let mut sql = "SELECT COUNT(*) FROM drugs".to_string();
        self.push_where(&mut sql, &mut binds);
        (sql, binds)
    }

    fn push_where(&self, sql: &mut String, binds: &mut Vec<BindValue>) {
        let mut clauses = Vec::new();

        if let Some(company) = &self.filter.company {
            binds.push(BindValue::Text(company.clone()));
            clauses.push(format!("company = ${}", binds.len()));
        }

        if let Some(search) = &self.filter.search {
            binds.push(BindValue::Text(contains_pattern(search)));
            let n = binds.len();
            clauses.push(format!(
                "(generic_name ILIKE ${n} ESCAPE '\\' OR brand_name ILIKE ${n} ESCAPE '\\' \
                 OR company ILIKE ${n} ESCAPE '\\' OR code ILIKE ${n} ESCAPE '\\')"
            ));
        }

        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
    }
}

/// `%term%` with LIKE metacharacters in `term` escaped.
pub(crate) fn contains_pattern(term: &str) -> String {
    let mut out = String::with_capacity(term.len() + 2);
    out.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('%');
    out
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

use sqlx::SqlitePool;

pub struct NewDependent<'a> {
    pub id: i64,
    pub employee_id: i64,
    pub full_name: &'a str,
    pub relationship: &'a str,
    pub birth_date: Option<&'a str>,
    pub coverage_pct: Option<f64>,
    pub photo: Option<&'a [u8]>,
}

impl<'a> NewDependent<'a> {
    pub fn new(id: i64, employee_id: i64, full_name: &'a str, relationship: &'a str) -> Self {
        Self {
            id,
            employee_id,
            full_name,
            relationship,
            birth_date: None,
            coverage_pct: None,
            photo: None,
        }
    }
}

pub async fn insert_dependent(pool: &SqlitePool, dependent: NewDependent<'_>) {
    sqlx::query(
        r#"
          INSERT INTO dependents (
              id, employee_id, full_name, relationship, birth_date, coverage_pct, photo
          ) VALUES (?, ?, ?, ?, ?, ?, ?)
          "#,
    )
    .bind(dependent.id)
    .bind(dependent.employee_id)
    .bind(dependent.full_name)
    .bind(dependent.relationship)
    .bind(dependent.birth_date)
    .bind(dependent.coverage_pct)
    .bind(dependent.photo)
    .execute(pool)
    .await
    .expect("Failed to insert test dependent");
}

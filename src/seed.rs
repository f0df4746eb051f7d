use anyhow::Result;
use tracing::info;

use crate::store::LeaveStore;

/// Populate the store with a handful of synthetic students and leave records.
/// Goes through the store's public operations only; gated by SEED_DEMO_DATA.
pub fn seed_demo_data(store: &LeaveStore) -> Result<()> {
    const STUDENTS: [(&str, &str); 3] = [
        ("stu001", "Rahim Uddin"),
        ("stu002", "Karim Hossain"),
        ("stu003", "Salma Akter"),
    ];
    const LEAVES: [(&str, &str, &str); 5] = [
        ("stu001", "2025-06-01", "Fever"),
        ("stu001", "2025-06-05", "Family event"),
        ("stu002", "2025-06-02", "Travel"),
        ("stu002", "2025-06-03", "Travel"),
        ("stu003", "2025-06-10", "Medical appointment"),
    ];

    for (id, name) in STUDENTS {
        store.register_student(id, name);
    }
    for (id, date, reason) in LEAVES {
        store.submit_leave(id, date, reason)?;
    }

    // A couple of non-pending records so status filters have something to show.
    store.update_leave_status("stu001", "2025-06-01", "approved")?;
    store.update_leave_status("stu002", "2025-06-03", "rejected")?;

    info!(
        students = STUDENTS.len(),
        records = LEAVES.len(),
        "Seeded demo leave data"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeding_is_idempotent_only_once() {
        let store = LeaveStore::new();
        seed_demo_data(&store).unwrap();
        assert_eq!(store.get_all_leave_requests().len(), 3);

        // Re-seeding trips the duplicate-date check rather than doubling data.
        assert!(seed_demo_data(&store).is_err());
    }
}

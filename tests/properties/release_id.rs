//! Property tests for release identifiers.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use relink::ReleaseId;

fn datetime() -> impl Strategy<Value = NaiveDateTime> {
    // 2000-01-01 .. 2099-12-31, whole seconds
    (0i64..3_155_760_000).prop_map(|secs| {
        NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
            + Duration::seconds(secs)
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Later runs (one second or more apart) get strictly greater ids,
    /// both as strings and as values.
    #[test]
    fn property_ids_sort_like_time(
        at in datetime(),
        gap in 1i64..10_000_000
    ) {
        let earlier = ReleaseId::from_datetime(at);
        let later = ReleaseId::from_datetime(at + Duration::seconds(gap));

        prop_assert!(earlier.as_str() < later.as_str());
        prop_assert!(earlier < later);
    }

    /// PROPERTY: Ids are always fourteen ASCII digits.
    #[test]
    fn property_id_shape(at in datetime()) {
        let id = ReleaseId::from_datetime(at);

        prop_assert_eq!(id.as_str().len(), 14);
        prop_assert!(id.as_str().bytes().all(|b| b.is_ascii_digit()));
        prop_assert_eq!(id.archive_name(), format!("{}.tar.gz", id.as_str()));
    }
}

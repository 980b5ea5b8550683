//! 空き状況カレンダーの日ごとの分類。
//!
//! 予約を日付ごとにまとめ、その日の予約ステータスの組み合わせから
//! カレンダーの色分けに使う分類を決める。

use crate::model::{id::SpaceId, reservation::ReservationStatus};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use strum::{AsRefStr, Display};

/// カレンダーに載せる予約 1 件分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookedSlot {
    pub event_date: NaiveDate,
    pub space_id: SpaceId,
    pub space_name: String,
    pub status: ReservationStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookedSpace {
    pub space_id: SpaceId,
    pub space_name: String,
    pub status: ReservationStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, AsRefStr, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DayStatus {
    AllConfirmed,
    AllPending,
    MixedStatus,
    /// キャンセル済み・完了済みだけの日
    Booked,
}

impl DayStatus {
    /// 予約が 1 件もなければ None
    pub fn classify<I>(statuses: I) -> Option<Self>
    where
        I: IntoIterator<Item = ReservationStatus>,
    {
        let mut any = false;
        let mut confirmed = 0usize;
        let mut pending = 0usize;
        for status in statuses {
            any = true;
            match status {
                ReservationStatus::Confirmed => confirmed += 1,
                ReservationStatus::Pending => pending += 1,
                ReservationStatus::Cancelled | ReservationStatus::Completed => {}
            }
        }

        match (any, confirmed > 0, pending > 0) {
            (false, _, _) => None,
            (true, true, false) => Some(Self::AllConfirmed),
            (true, false, true) => Some(Self::AllPending),
            (true, true, true) => Some(Self::MixedStatus),
            (true, false, false) => Some(Self::Booked),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookedDay {
    pub date: NaiveDate,
    pub spaces: Vec<BookedSpace>,
}

impl BookedDay {
    pub fn status(&self) -> Option<DayStatus> {
        DayStatus::classify(self.spaces.iter().map(|s| s.status))
    }
}

/// 日付の昇順に並べ、同じ日の予約は入力順のまま保つ
pub fn group_by_date(slots: impl IntoIterator<Item = BookedSlot>) -> Vec<BookedDay> {
    let mut days: BTreeMap<NaiveDate, Vec<BookedSpace>> = BTreeMap::new();
    for BookedSlot {
        event_date,
        space_id,
        space_name,
        status,
    } in slots
    {
        days.entry(event_date).or_default().push(BookedSpace {
            space_id,
            space_name,
            status,
        });
    }
    days.into_iter()
        .map(|(date, spaces)| BookedDay { date, spaces })
        .collect()
}

/// 空き状況の取得範囲。どちらも含む。
#[derive(Debug, Clone, Copy, Default)]
pub struct AvailabilityRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use ReservationStatus::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, d).unwrap()
    }

    fn slot(d: u32, space_id: SpaceId, name: &str, status: ReservationStatus) -> BookedSlot {
        BookedSlot {
            event_date: date(d),
            space_id,
            space_name: name.into(),
            status,
        }
    }

    #[rstest]
    #[case(&[Confirmed, Confirmed], Some(DayStatus::AllConfirmed))]
    #[case(&[Confirmed, Cancelled], Some(DayStatus::AllConfirmed))]
    #[case(&[Pending], Some(DayStatus::AllPending))]
    #[case(&[Pending, Completed], Some(DayStatus::AllPending))]
    #[case(&[Confirmed, Pending], Some(DayStatus::MixedStatus))]
    #[case(&[Pending, Cancelled, Confirmed], Some(DayStatus::MixedStatus))]
    #[case(&[Cancelled, Completed], Some(DayStatus::Booked))]
    #[case(&[Cancelled], Some(DayStatus::Booked))]
    fn classifies_a_day_by_its_statuses(
        #[case] statuses: &[ReservationStatus],
        #[case] expected: Option<DayStatus>,
    ) {
        assert_eq!(DayStatus::classify(statuses.iter().copied()), expected);
    }

    #[test]
    fn day_without_reservations_has_no_classification() {
        assert_eq!(DayStatus::classify(Vec::new()), None);
    }

    #[test]
    fn day_status_labels() {
        assert_eq!(DayStatus::AllConfirmed.as_ref(), "all-confirmed");
        assert_eq!(DayStatus::AllPending.as_ref(), "all-pending");
        assert_eq!(DayStatus::MixedStatus.as_ref(), "mixed-status");
        assert_eq!(DayStatus::Booked.as_ref(), "booked");
        assert_eq!(
            serde_json::to_string(&DayStatus::MixedStatus).unwrap(),
            "\"mixed-status\""
        );
    }

    #[test]
    fn groups_slots_by_date_in_ascending_order() {
        let main_hall = SpaceId::new();
        let garden = SpaceId::new();
        let slots = vec![
            slot(18, main_hall, "Main Hall", Pending),
            slot(5, garden, "Garden Terrace", Confirmed),
            slot(18, garden, "Garden Terrace", Confirmed),
            slot(5, main_hall, "Main Hall", Confirmed),
        ];

        let days = group_by_date(slots);

        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, date(5));
        assert_eq!(days[0].status(), Some(DayStatus::AllConfirmed));
        assert_eq!(days[0].spaces[0].space_id, garden);
        assert_eq!(days[0].spaces[1].space_id, main_hall);

        assert_eq!(days[1].date, date(18));
        assert_eq!(days[1].status(), Some(DayStatus::MixedStatus));
        assert_eq!(days[1].spaces[0].space_name, "Main Hall");
    }

    #[test]
    fn no_slots_means_no_days() {
        assert!(group_by_date(Vec::new()).is_empty());
    }
}

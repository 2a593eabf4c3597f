//! The catalog shipped with the application.

use std::collections::BTreeMap;

use super::{Catalog, DocumentLabels};
use crate::models::Goal;

const GOALS: [(u32, &str, &str); 6] = [
    (
        1,
        "הטמעת סביבת ענן וכלי סביבת ענן (גוגל קלאסרום/טימס)",
        "☁️",
    ),
    (2, "קידום חשיבה מחשובית ורובוטיקה בבית הספר", "🤖"),
    (
        3,
        "קידום שימוש בתוכנת ניהול פדגוגי (נוכחות, ציונים שוטפים וכו')",
        "📊",
    ),
    (4, "הטמעה ויישום של נושא אבטחת מידע", "🔒"),
    (5, "הטמעה והגברת שימוש נכון בספקי התוכן שבי\"ס רכש", "📚"),
    (
        6,
        "השתתפות בי\"ס (כיתה אחת לפחות) במיזם מחוזי אחד לפחות מתוך רשימת המיזמים המחוזיים",
        "🏆",
    ),
];

const OBJECTIVES: [(u32, &[&str]); 6] = [
    (
        1,
        &[
            "פתיחת כיתה וירטואלית (קלאסרום/טימס) לכל כיתת אם",
            "עבודה בכיתה הוירטואלית באופן שוטף ב-2 כיתות לפחות",
            "הדרכת צוות מורים (מליאה או לפי קבוצות) לשימוש נכון בכיתה וירטואלית",
            "השתתפות במיזם בניית אתרים להטמעת כלי גוגל וסביבת ענן גוגל קלאסרום",
            "השתתפות במיזם של הטמעת סביבת ענן (מיזמים שיפורסמו בהמשך)",
        ],
    ),
    (
        2,
        &[
            "הפעלת תוכנית לימודים בחשיבה מחשובית בשכבה אחת לפחות",
            "שילוב פעילויות רובוטיקה בשיעורי מדע וטכנולוגיה",
            "הדרכת צוות מורים להוראת חשיבה מחשובית",
            "השתתפות בתחרות או באירוע רובוטיקה מחוזי",
            "הקמת פינת יצירה (מייקרים) לתלמידים",
        ],
    ),
    (
        3,
        &[
            "הזנת נוכחות שוטפת בתוכנת הניהול הפדגוגי על ידי כל המורים",
            "הזנת ציונים שוטפים לפחות פעם בחודש בכל מקצועות הליבה",
            "הדרכת צוות המורים לשימוש בתוכנת הניהול הפדגוגי",
            "שימוש בדוחות התוכנה לניתוח הישגים ולקבלת החלטות",
            "שליחת הודעות להורים דרך התוכנה",
        ],
    ),
    (
        4,
        &[
            "הדרכת צוות המורים בנושא אבטחת מידע ופרטיות",
            "פעילות מודעות לגלישה בטוחה לתלמידים בכל השכבות",
            "עדכון נהלי סיסמאות והרשאות גישה במערכות בית הספר",
            "מיפוי וגיבוי מאגרי המידע של בית הספר",
        ],
    ),
    (
        5,
        &[
            "מיפוי ספקי התוכן שבית הספר רכש והפצת המידע לצוות",
            "הדרכת מורים לשימוש בספקי התוכן בהתאם לתחומי הדעת",
            "שילוב ספקי התוכן בתכנון השיעורים ב-2 מקצועות לפחות",
            "מעקב אחר נתוני השימוש בספקי התוכן",
        ],
    ),
    (
        6,
        &[
            "בחירת מיזם מחוזי מתוך רשימת המיזמים והרשמה אליו",
            "ליווי הכיתה המשתתפת לאורך המיזם",
            "הצגת תוצרי המיזם בפני קהילת בית הספר",
        ],
    ),
];

pub(super) const TITLE: &str = "תכנית עבודה שנתית - רכז טכנו-פדגוגי";

pub(super) const HEADERS: [&str; 7] = [
    "מטרה",
    "יעדים",
    "משאבים",
    "שותפים",
    "מדדי ביצוע",
    "תאריך התחלה",
    "תאריך מדידה",
];

impl Catalog {
    /// The six technology goals and their objectives, with Hebrew labels.
    pub fn builtin() -> Self {
        let goals = GOALS
            .iter()
            .map(|(id, text, emoji)| Goal::new(*id, *text, *emoji))
            .collect();
        let objectives = OBJECTIVES
            .iter()
            .map(|(id, list)| (*id, list.iter().map(|s| (*s).to_string()).collect()))
            .collect::<BTreeMap<_, _>>();

        Self {
            goals,
            objectives,
            labels: DocumentLabels::default(),
        }
    }
}

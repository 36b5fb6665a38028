//! Frequently asked questions.
//!
//! Answers are looked up by exact match on the (lower-cased) question; anything
//! else gets the default answer describing what the service can help with.

use std::collections::HashMap;

/// One question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Static FAQ table with a fallback answer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "FaqTable", into = "FaqTable"))]
pub struct FaqResponder {
    entries: Vec<FaqEntry>,
    index: HashMap<String, usize>,
    default_answer: String,
}

impl FaqResponder {
    /// Builds a responder; later entries with a repeated question win.
    pub fn new(entries: Vec<FaqEntry>, default_answer: impl Into<String>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.question.to_lowercase(), i))
            .collect();
        Self {
            entries,
            index,
            default_answer: default_answer.into(),
        }
    }

    /// The Wasit water directorate's published answers.
    pub fn wasit() -> Self {
        Self::new(
            vec![
                FaqEntry::new(
                    "كيفية التقديم",
                    "لطلب شهادة ميلاد:\n\
                     1. احضر إلى مديرية الأحوال المدنية في الكوت\n\
                     2. أحضر الهوية الوطنية وسجل العائلة\n\
                     3. الدفع: 10,000 دينار\n\
                     مدة المعالجة: 3-5 أيام عمل",
                ),
                FaqEntry::new(
                    "جدول المياه",
                    "مواعيد توزيع المياه حسب المنطقة:\n\
                     - الكوت: 6-9 صباحاً، 6-8 مساءً\n\
                     - الحي: 7-10 صباحاً، 7-9 مساءً\n\
                     - بدرة: 8-11 صباحاً، 8-10 مساءً\n\
                     - النعمانية: 5-8 صباحاً، 5-7 مساءً\n\
                     - الصويرة: 6:30-9:30 صباحاً، 6:30-8:30 مساءً",
                ),
                FaqEntry::new(
                    "ترشيد الاستهلاك",
                    "نصائح لترشيد المياه:\n\
                     - إصلاح التسريبات فوراً\n\
                     - استخدام الري بالتنقيط\n\
                     - جمع مياه الأمطار\n\
                     - تقليل وقت الاستحمام",
                ),
            ],
            "نظامنا الذكي يمكنه المساعدة في:\n\
             - توزيع المياه العادل\n\
             - استخراج المياه من الجو\n\
             - إرشادات ترشيد الاستهلاك\n\
             الرجاء تحديد سؤال أكثر دقة",
        )
    }

    /// Answer for `question`, or the default answer.
    pub fn respond(&self, question: &str) -> &str {
        self.lookup(question).unwrap_or(self.default_answer.as_str())
    }

    /// Answer for `question` if it is a known key.
    pub fn lookup(&self, question: &str) -> Option<&str> {
        self.index
            .get(&question.to_lowercase())
            .map(|&i| self.entries[i].answer.as_str())
    }

    /// Known questions in display order.
    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.question.as_str())
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn default_answer(&self) -> &str {
        &self.default_answer
    }
}

impl Default for FaqResponder {
    fn default() -> Self {
        Self::wasit()
    }
}

/// Serialized form of [`FaqResponder`]; the lookup index is rebuilt on load.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct FaqTable {
    entries: Vec<FaqEntry>,
    default_answer: String,
}

#[cfg(feature = "serde")]
impl From<FaqTable> for FaqResponder {
    fn from(table: FaqTable) -> Self {
        FaqResponder::new(table.entries, table.default_answer)
    }
}

#[cfg(feature = "serde")]
impl From<FaqResponder> for FaqTable {
    fn from(responder: FaqResponder) -> Self {
        FaqTable {
            entries: responder.entries,
            default_answer: responder.default_answer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_questions_are_answered() {
        let faq = FaqResponder::wasit();
        assert!(faq.respond("جدول المياه").contains("الكوت: 6-9 صباحاً"));
        assert!(faq.respond("ترشيد الاستهلاك").contains("الري بالتنقيط"));
        assert!(faq.respond("كيفية التقديم").contains("10,000 دينار"));
    }

    #[test]
    fn unknown_questions_get_default() {
        let faq = FaqResponder::wasit();
        for q in ["", "جدول", "جدول المياه ", "water schedule", "ما هو جدول المياه؟"] {
            assert_eq!(faq.respond(q), faq.default_answer(), "{q:?}");
            assert_eq!(faq.lookup(q), None);
        }
    }

    #[test]
    fn questions_keep_display_order() {
        let faq = FaqResponder::wasit();
        let questions: Vec<&str> = faq.questions().collect();
        assert_eq!(questions, vec!["كيفية التقديم", "جدول المياه", "ترشيد الاستهلاك"]);
    }

    #[test]
    fn matching_ignores_latin_case() {
        let faq = FaqResponder::new(vec![FaqEntry::new("Schedule", "daily")], "none");
        assert_eq!(faq.respond("SCHEDULE"), "daily");
        assert_eq!(faq.respond("schedule"), "daily");
        assert_eq!(faq.respond("plan"), "none");
    }

    #[test]
    fn repeated_question_uses_last_entry() {
        let faq = FaqResponder::new(
            vec![FaqEntry::new("q", "first"), FaqEntry::new("q", "second")],
            "none",
        );
        assert_eq!(faq.respond("q"), "second");
    }
}

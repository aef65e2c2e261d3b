use super::domain::{AssessmentError, Characteristic, Dosha, Question};

#[derive(Debug, Clone)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn from_questions(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Question at a zero-based wizard position.
    pub fn at(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn by_id(&self, question_id: u32) -> Option<&Question> {
        self.questions
            .iter()
            .find(|question| question.id == question_id)
    }

    /// Dosha that a characteristic votes for, validating both positions.
    pub fn dosha_for(
        &self,
        question_id: u32,
        characteristic_index: usize,
    ) -> Result<Dosha, AssessmentError> {
        let question = self
            .by_id(question_id)
            .ok_or(AssessmentError::UnknownQuestion(question_id))?;
        question
            .characteristic(characteristic_index)
            .map(|characteristic| characteristic.dosha)
            .ok_or(AssessmentError::UnknownCharacteristic {
                question_id,
                index: characteristic_index,
            })
    }

    pub fn characteristic_count(&self) -> usize {
        self.questions
            .iter()
            .map(|question| question.characteristics.len())
            .sum()
    }
}

fn standard_questions() -> Vec<Question> {
    vec![
        Question {
            id: 1,
            category: "Mind & Body Response",
            prompt: "How do you typically feel about the changes in weather, especially cold, heat, or humidity?",
            characteristics: vec![
                Characteristic {
                    text: "Discomfort in cold, dry, windy weather",
                    dosha: Dosha::Vata,
                },
                Characteristic {
                    text: "Discomfort in hot, humid weather",
                    dosha: Dosha::Pitta,
                },
                Characteristic {
                    text: "Discomfort in cold, damp weather",
                    dosha: Dosha::Kapha,
                },
            ],
        },
        Question {
            id: 2,
            category: "Response Pattern",
            prompt: "How do you describe your response mechanism over the course of your life?",
            characteristics: vec![
                Characteristic {
                    text: "Instinctive and quick",
                    dosha: Dosha::Vata,
                },
                Characteristic {
                    text: "Calculated and sure",
                    dosha: Dosha::Pitta,
                },
                Characteristic {
                    text: "Slow but lasting",
                    dosha: Dosha::Kapha,
                },
            ],
        },
        Question {
            id: 3,
            category: "Energy & Endurance",
            prompt: "How would you describe your stamina and energy levels?",
            characteristics: vec![
                Characteristic {
                    text: "Sudden burst of energy but easily burn out",
                    dosha: Dosha::Vata,
                },
                Characteristic {
                    text: "Good when focused, tend to over exertion",
                    dosha: Dosha::Pitta,
                },
                Characteristic {
                    text: "Slow to start, but long lasting endurance",
                    dosha: Dosha::Kapha,
                },
            ],
        },
        Question {
            id: 4,
            category: "Stress Reaction",
            prompt: "How do you typically handle stress or challenging situations?",
            characteristics: vec![
                Characteristic {
                    text: "Anxiety, restlessness, difficulty concentrating",
                    dosha: Dosha::Vata,
                },
                Characteristic {
                    text: "Irritability, impatience, a need to control",
                    dosha: Dosha::Pitta,
                },
                Characteristic {
                    text: "Withdrawal, lethargy, avoidance",
                    dosha: Dosha::Kapha,
                },
            ],
        },
        Question {
            id: 5,
            category: "Emotional Pattern",
            prompt: "What emotional characteristics do you most identify with?",
            characteristics: vec![
                Characteristic {
                    text: "Creativity, enthusiasm, flexibility",
                    dosha: Dosha::Vata,
                },
                Characteristic {
                    text: "Courage, clarity, determination",
                    dosha: Dosha::Pitta,
                },
                Characteristic {
                    text: "Patience, loyalty, compassion",
                    dosha: Dosha::Kapha,
                },
            ],
        },
    ]
}

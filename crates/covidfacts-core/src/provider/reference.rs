// Copyright 2025 The covidfacts Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::provider::DataProvider;
use crate::types::info_card::InfoCard;
use crate::types::question::QuizQuestion;

/// The compiled-in quiz and card data, standing in for a backend until one
/// exists.
#[derive(Clone, Debug, PartialEq)]
pub struct StaticProvider {
    questions: Vec<QuizQuestion>,
    answers: Vec<usize>,
    cards: Vec<InfoCard>,
}

const CORRECT_ANSWERS: [usize; 10] = [1, 2, 1, 0, 0, 0, 3, 1, 0, 2];

const QUESTIONS: [(&str, &[&str]); 10] = [
    (
        "What does COVID-19 stand for?",
        &[
            "It's a term for Coronavirus Disease 19, because it's the 19th strain of coronavirus discovered.",
            "It's a term that stands for Coronavirus Disease 2019, the year it was first identified.",
        ],
    ),
    (
        "What other viruses belong to the coronavirus family?",
        &["SARS and influenza", "SARS and MERS", "SARS and HIV"],
    ),
    (
        "True or False: The virus is mutating rapidly.",
        &["True", "False"],
    ),
    (
        "How does weather seem to affect the novel coronavirus?",
        &[
            "The virus can’t survive in hot, humid climates.",
            "Cold temperatures can kill the virus.",
            "It is not yet known.",
        ],
    ),
    (
        "True or False: COVID-19 has currently been detected on all seven continents.",
        &["True", "False"],
    ),
    (
        "How is COVID-19 passed on?",
        &[
            "Through droplets that come from your mouth and nose when you cough or breathe out",
            "In sexual fluids, including semen, vaginal fluids or anal mucous",
            "By drinking unclean water",
        ],
    ),
    (
        "What are the common symptoms of COVID-19?",
        &[
            "A new and continuous cough",
            "Fever",
            "Tiredness",
            "All of the above",
        ],
    ),
    (
        "Are people living with HIV always more at risk?",
        &[
            "Yes – people with HIV have weaker immune systems",
            "No – people who adhere to antiretroviral treatment (ART) and have a high CD4 count aren’t more at risk",
        ],
    ),
    (
        "When should fabric face masks be worn?",
        &[
            "On public transport",
            "In confined or crowded spaces",
            "In small shops",
            "All of the above",
        ],
    ),
    (
        "Can COVID-19 be cured?",
        &[
            "Yes – Hot drinks can cure COVID-19",
            "No – COVID-19 is a death sentence",
            "No – but most people get better by themselves",
        ],
    ),
];

/// (category, image URL, description)
const INFO_CARDS: [(&str, &str, &str); 4] = [
    (
        "N-95 Masks",
        "https://image.shutterstock.com/image-photo/kn95-n95-mask-protection-pm-260nw-1681636747.jpg",
        r#"An N95 respirator is a commonly-used, abbreviated name for an N95 filtering facepiece respirator, which is a particulate-filtering facepiece respirator that meets the U.S. National Institute for Occupational Safety and Health (NIOSH) N95 classification of air filtration, meaning that it filters at least 95% of airborne particles. This standard does not require that the respirator be resistant to oil; another standard, P95, adds that requirement. The N95 type is the most common particulate-filtering facepiece respirator.It is an example of a mechanical filter respirator, which provides protection against particulates but not against gases or vapors.An authentic N95 respirator is marked with the text "NIOSH" or the NIOSH logo, the filter class ("N95"), a "TC" approval number of the form XXX-XXXX, the approval number must be listed on the NIOSH Certified Equipment List (CEL) or the NIOSH Trusted-Source page, and it must have headbands instead of ear loops."#,
    ),
    (
        "PPE Kit",
        "https://images-na.ssl-images-amazon.com/images/I/61k-rZ3D%2BBL._SX466_.jpg",
        "Personal protective equipment (PPE) is protective clothing, helmets, goggles, or other garments or equipment designed to protect the wearer's body from injury or infection. The hazards addressed by protective equipment include physical, electrical, heat, chemicals, biohazards, and airborne particulate matter. Protective equipment may be worn for job-related occupational safety and health purposes, as well as for sports and other recreational activities.Protective clothing is applied to traditional categories of clothing, and protective gear applies to items such as pads, guards, shields, or masks, and others. PPE suits can be similar in appearance to a cleanroom suit. The purpose of personal protective equipment is to reduce employee exposure to hazards when engineering controls and administrative controls are not feasible or effective to reduce these risks to acceptable levels. PPE is needed when there are hazards present. PPE has the serious limitation that it does not eliminate the hazard at the source and may result in employees being exposed to the hazard if the equipment fails.",
    ),
    (
        "Hand Sanitizer",
        "https://image.shutterstock.com/image-photo/coronavirus-prevention-medical-surgical-masks-600w-1661207908.jpg",
        "Hand sanitizer is a liquid, gel, or foam generally used to decrease infectious agents on the hands. In most settings hand washing with soap and water is generally preferred. Hand sanitizer is less effective at killing certain kinds of germs, such as norovirus and Clostridium difficile and unlike soap and water, it cannot remove harmful chemicals. People may incorrectly wipe off hand sanitizer before it has dried, and some are less effective because their alcohol concentrations are too low. In most healthcare settings alcohol-based hand sanitizers are preferable to hand washing with soap and water, because it may be better tolerated and is more effective at reducing bacteria. Hand washing with soap and water, however, should be carried out if contamination can be seen, or following the use of the toilet. The general use of non-alcohol-based hand sanitizers has no recommendations.",
    ),
    (
        "Gloves",
        "https://i0.wp.com/vashielectricals.com/wp-content/uploads/2020/06/HG-NW32.png?fit=2200%2C2200&ssl=1",
        "A glove is a garment covering the whole hand. Gloves usually have separate sheaths or openings for each finger and the thumb.If there is an opening but no (or a short) covering sheath for each finger they are called fingerless gloves. Fingerless gloves having one small opening rather than individual openings for each finger are sometimes called gauntlets, though gauntlets are not necessarily fingerless. Gloves which cover the entire hand or fist but do not have separate finger openings or sheaths are called mittens. Mittens are warmer than other styles of gloves made of the same material because fingers maintain their warmth better when they are in contact with each other; reduced surface area reduces heat loss.",
    ),
];

impl StaticProvider {
    pub fn new() -> Self {
        let questions = QUESTIONS
            .iter()
            .map(|(prompt, choices)| QuizQuestion::new_text(*prompt, choices.iter().copied()))
            .collect();
        let cards = INFO_CARDS
            .iter()
            .map(|(category, image_url, description)| {
                InfoCard::new(*category, *image_url, *description)
            })
            .collect();
        Self {
            questions,
            answers: CORRECT_ANSWERS.to_vec(),
            cards,
        }
    }
}

impl Default for StaticProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DataProvider for StaticProvider {
    fn quiz_questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    fn correct_answers(&self) -> &[usize] {
        &self.answers
    }

    fn info_cards(&self) -> &[InfoCard] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::check_provider;

    #[test]
    fn test_first_question() {
        let provider = StaticProvider::new();
        let first = &provider.quiz_questions()[0];
        assert_eq!(first.prompt, "What does COVID-19 stand for?");
        assert_eq!(first.choices.len(), 2);
    }

    #[test]
    fn test_answer_key() {
        let provider = StaticProvider::new();
        assert_eq!(provider.correct_answers()[0], 1);
        assert_eq!(provider.correct_answers().len(), 10);
        assert_eq!(
            provider.correct_answers().len(),
            provider.quiz_questions().len()
        );
    }

    #[test]
    fn test_true_false_and_yes_no_answers() {
        let provider = StaticProvider::new();
        assert_eq!(provider.correct_answers(), &[1, 2, 1, 0, 0, 0, 3, 1, 0, 2]);
        let picked: Vec<&str> = provider
            .quiz_questions()
            .iter()
            .zip(provider.correct_answers())
            .map(|(question, answer)| question.choices[*answer].label.as_str())
            .collect();
        assert_eq!(picked[2], "False");
        assert_eq!(picked[4], "True");
        assert!(picked[7].starts_with("No – people who adhere"));
        assert_eq!(picked[9], "No – but most people get better by themselves");
    }

    #[test]
    fn test_info_cards() {
        let provider = StaticProvider::new();
        let cards = provider.info_cards();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].category, "N-95 Masks");
        let categories: Vec<&str> = cards.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(
            categories,
            vec!["N-95 Masks", "PPE Kit", "Hand Sanitizer", "Gloves"]
        );
    }

    #[test]
    fn test_every_answer_is_a_valid_choice() {
        let provider = StaticProvider::new();
        for (question, answer) in provider
            .quiz_questions()
            .iter()
            .zip(provider.correct_answers())
        {
            assert!(question.has_choice(*answer), "{}", question.prompt);
            assert!((2..=4).contains(&question.choices.len()));
        }
    }

    #[test]
    fn test_reads_are_stable() {
        let provider = StaticProvider::new();
        assert_eq!(provider.quiz_questions(), provider.quiz_questions());
        assert_eq!(provider.correct_answers(), provider.correct_answers());
        assert_eq!(provider.info_cards(), provider.info_cards());
        assert_eq!(provider, StaticProvider::default());
    }

    #[test]
    fn test_passes_check() {
        let provider = StaticProvider::new();
        assert!(check_provider(&provider).is_empty());
    }
}

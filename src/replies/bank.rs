//! Canned engagement replies, grouped by category.
//!
//! Order and length matter: rotation serves entry N on the Nth trigger of a
//! category within a session.

use super::policy::ReplyCategory;

const OTP_REPLIES: &[&str] = &[
    "I received multiple OTP messages and I am confused. Which exact OTP should I share and why?",
    "The OTP says do not share with anyone. Are you sure it is okay to give it to you?",
    "I got two codes, one from the bank and one from some other number. Which one do you need?",
    "My phone is very slow today. Can you tell me which bank the OTP will come from?",
    "The message expired before I could read it. Can you send it again?",
    "Is the PIN the same as my ATM PIN or a different one? I have many PINs.",
    "My son usually handles these codes. Can you give me your number so he can call you?",
    "Which department are you calling from? The SMS does not mention your name.",
    "I typed the OTP somewhere and it said invalid. Should I try again?",
    "Can you tell me what the OTP will be used for exactly? I want to note it down.",
    "Before I share anything, what is your employee ID? I was told to always ask.",
    "The OTP came in Hindi and English. Which one should I read out?",
    "Sorry, my screen cracked. Can you tell me the last two digits you are expecting?",
    "Why does the bank need an OTP if you are already calling from the bank?",
    "My network is bad. Can I send the code to your UPI ID or email instead?",
    "It is asking me to enter the PIN in some app. What is the name of the app?",
    "I am outside right now. Can you give me a link where I can enter it later?",
    "There is a code ending in 4 and another ending in 9. Which one is yours?",
    "I forgot my PIN. Can you tell me how to reset it first?",
    "Let me find my reading glasses. Meanwhile, which branch are you from?",
];

const THREAT_REPLIES: &[&str] = &[
    "This is very stressful. Can you hold the block for a few minutes while I contact my bank manager?",
    "Why was my account blocked? I did not do anything wrong.",
    "I have my salary in that account. Please do not lock it. What should I do?",
    "Can you send me an official notice about the suspension? I need it for my records.",
    "Which transaction caused this block? I want to check my statement.",
    "My husband also uses this account. Will his card also stop working?",
    "Is there any fee to unblock the account? How do I pay it?",
    "How long will the account stay locked if I do nothing?",
    "I just used my card an hour ago and it worked. Are you sure it is blocked?",
    "Can you give me a reference number for this block so I can quote it at the branch?",
    "Please tell me your full name and designation. I am writing everything down.",
    "Who ordered the suspension? Was it the RBI or the bank?",
    "I am very scared. Can I visit the branch tomorrow instead of doing this on the phone?",
    "Will my fixed deposits also be frozen? They are in the same bank.",
    "Which account is locked, savings or current? I have both.",
    "Can you send me the details on WhatsApp? I will show it to my son.",
    "What is the number I should call back to confirm this is real?",
    "My internet banking is still working. Why would it be suspended?",
    "If I transfer the money out first, will the block be removed?",
    "Okay, I am ready. Tell me the steps one by one slowly.",
];

const ACCOUNT_NUMBER_REPLIES: &[&str] = &[
    "This account number does not look familiar to me. Can you tell me the bank branch or account type linked to it?",
    "Which account number do you need, the one on my passbook or on my cheque book?",
    "My account number is very long. Can you first read out yours so I can match the format?",
    "Is this the account where I should send the money? Whose name is on it?",
    "The IFSC code is also needed, right? What is the IFSC for your account?",
    "I have three accounts. Which bank should I give the number for?",
    "Can you send the account number again? I think one digit was missing.",
    "Is it a savings account or a current account you are asking about?",
    "My passbook is in the cupboard. Can you hold while I find it?",
    "Should I write the account number in the message or say it on call?",
    "What name will show when I add this account as a beneficiary?",
    "The app says the beneficiary name does not match. Can you confirm the name?",
    "Which city is this account branch in? I want to be sure.",
    "Can you share a cancelled cheque photo of your account? The bank asks for it.",
    "I only remember the last four digits of my account. Is that enough?",
    "Why do you need my account number if you already have my details?",
    "Is this account linked to a UPI ID also? That might be easier for me.",
    "My son says never to share account numbers. Can you explain why you need it?",
    "Should I add your account as a payee first? What is the account holder name?",
    "The transfer form is asking for branch name. Which branch is your account in?",
];

const FRAUD_REPLIES: &[&str] = &[
    "Before I proceed, can you please confirm your employee ID or department? I need this for my safety.",
    "What kind of fraud happened? I want to know the exact details.",
    "Was my card used somewhere? Which city and which shop?",
    "How did you find out about this security issue before me?",
    "Can you send me the complaint number for this fraud case?",
    "Which cyber cell is handling this? I can go there in person.",
    "Is there an email from the bank about this breach? Please forward it.",
    "I want to speak to your supervisor. What is their name and extension?",
    "How much money was taken? I will check with my statement.",
    "Can you give me a link to the official fraud report page?",
    "What should I do to secure my account? Please explain step by step.",
    "My friend also got a call like this. Is this happening to many people?",
    "Is this the bank security team or the police? I am confused.",
    "Where should I send the safe amount to protect it? Whose account is that?",
    "Can I verify your identity by calling the number on my card?",
    "Please send me your official ID card photo so I can trust you.",
    "Which of my devices was hacked, my phone or my laptop?",
    "Do I need to file an FIR also? Which station should I go to?",
    "The bank website does not show any alert. Where did this come from?",
    "Okay, I want to cooperate. What details do you need from me first?",
];

const GENERIC_REPLIES: &[&str] = &[
    "I don't understand this properly. Can you explain why this is happening?",
    "Sorry, who is this? I don't have this number saved.",
    "Can you explain again slowly? I am not very good with these things.",
    "I have not tried logging in today. Which device or location caused this issue?",
    "What do you need me to do exactly?",
    "Is this urgent? I am in the middle of something.",
    "How did you get my number?",
    "Can you send this in writing so I can read it properly?",
    "I will need to ask my son about this. Can you call back later?",
    "Which company are you from? I want to note it down.",
    "Is there a website where I can check this myself?",
    "I am a little worried. Is my money safe?",
    "Can you tell me your name and where you are calling from?",
    "Do I need to pay anything for this? How do I pay?",
    "My phone battery is low. Can you give me a number to call back?",
    "I am not sure I follow. What happens if I do nothing?",
    "Can you share the details on email? What is your official email ID?",
    "Okay, please continue. What is the next step?",
    "Is this related to my bank or my mobile connection?",
    "I will do whatever is needed, just tell me clearly what to send and where.",
];

/// Fixed, ordered reply lists for every [`ReplyCategory`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplyBank;

impl ReplyBank {
    pub fn new() -> Self {
        Self
    }

    /// The ordered replies for `category`.
    pub fn replies(&self, category: ReplyCategory) -> &'static [&'static str] {
        match category {
            ReplyCategory::Otp => OTP_REPLIES,
            ReplyCategory::Threat => THREAT_REPLIES,
            ReplyCategory::AccountNumber => ACCOUNT_NUMBER_REPLIES,
            ReplyCategory::Fraud => FRAUD_REPLIES,
            ReplyCategory::Generic => GENERIC_REPLIES,
        }
    }

    pub fn size(&self, category: ReplyCategory) -> usize {
        self.replies(category).len()
    }
}

// E2E Test 3: Conversation flow
// Follow-up questions about a checked message: scam type, tips, summary,
// plus the notices for fresh sessions and blank questions

mod e2e;

use e2e::helpers::{generate_session_id, TestEnv, TestResult};
use std::time::Instant;

#[tokio::test]
async fn test_e2e_3_conversation_flow() {
    let start = Instant::now();
    let test_name = "E2E Test 3: Conversation flow".to_string();

    println!("\n🚀 Starting: {}", test_name);
    println!("{}", "=".repeat(80));

    // Step 1: Start the in-process service
    println!("\n📋 Step 1: Starting service...");
    let env = TestEnv::spawn().await;
    if let Err(e) = env.wait_until_healthy().await {
        let result = TestResult::failure(test_name, e, start.elapsed());
        result.print();
        panic!("Service did not become healthy");
    }
    println!("✅ Service is ready at {}", env.base_url);

    // Step 2: Check a phishing message
    println!("\n📋 Step 2: Checking a phishing message...");
    let session = generate_session_id("conversation");
    let body = env
        .check(&session, "URGENT: Verify your bank account password now")
        .await;
    assert_eq!(body["label"], "spam");
    println!("✅ Message flagged as spam");

    // Step 3: Ask for the scam type
    println!("\n📋 Step 3: Asking for the scam type...");
    let body = env.ask(&session, "What type of scam is this?").await;
    assert_eq!(body["kind"], "category");
    let answer = body["answer"].as_str().expect("answer");
    assert!(answer.contains("This message is a <b>🏦 Bank / Phishing Scam</b>."));
    assert!(answer.contains("color:red !important"));
    println!("✅ Bot named the scam type");

    // Step 4: Ask for tips
    println!("\n📋 Step 4: Asking for tips...");
    let body = env.ask(&session, "Any tips for me?").await;
    assert_eq!(body["kind"], "advice");
    let answer = body["answer"].as_str().expect("answer");
    assert!(answer.contains("Here are some tips:"));
    assert!(answer.contains("- Banks never ask for OTP or passwords through email/SMS."));
    println!("✅ Bot listed awareness tips");

    // Step 5: A question with no recognized keyword gets the full summary
    println!("\n📋 Step 5: Asking an open question...");
    let body = env.ask(&session, "tell me everything").await;
    assert_eq!(body["kind"], "summary");
    let answer = body["answer"].as_str().expect("answer");
    assert!(answer.contains("The message is <b>Spam</b>."));
    assert!(answer.contains("It's categorized as <b>🏦 Bank / Phishing Scam</b>."));
    assert!(answer.contains("Tips:"));
    println!("✅ Bot gave the full summary");

    // Step 6: A fresh session is told to check something first
    println!("\n📋 Step 6: Asking from a fresh session...");
    let other = generate_session_id("no_context");
    let body = env.ask(&other, "Is it safe?").await;
    assert_eq!(body["kind"], "no_context");
    assert_eq!(body["answer"], "⚠ Start by checking a suspicious message above.");
    println!("✅ Fresh session got the instructional notice");

    // Step 7: A blank question gets its own notice
    println!("\n📋 Step 7: Asking a blank question...");
    let body = env.ask(&session, "   ").await;
    assert_eq!(body["kind"], "empty_question");
    assert_eq!(body["answer"], "⚠ Please enter a question for the bot.");
    println!("✅ Blank question was rejected politely");

    let result = TestResult::success(test_name, start.elapsed());
    result.print();
}

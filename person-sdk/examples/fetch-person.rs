use person_sdk::{PersonProvider, RandomUserApi, RandomUserApiOptions};

#[tokio::main]
async fn main() {
    let api = RandomUserApi::new(RandomUserApiOptions::default());

    let person = api.fetch_person().await.unwrap();

    println!("{person:#?}");
}

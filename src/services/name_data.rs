//! Built-in popular name lists.

/// Popular male first names
pub static MALE_FIRST_NAMES: &[&str] = &[
    "Aaron", "Abel", "Abraham", "Adam", "Adrian", "Aidan", "Alan", "Albert", "Alec",
    "Alexander", "Alfred", "Andre", "Andrew", "Anthony", "Antonio", "Archer", "Arthur",
    "Ashton", "Austin", "Avery", "Axel", "Barry", "Benjamin", "Bennett", "Blake", "Bradley",
    "Brandon", "Brayden", "Brian", "Bruce", "Bryan", "Caleb", "Calvin", "Cameron", "Carl",
    "Carter", "Chandler", "Charles", "Chase", "Christian", "Christopher", "Clayton", "Colby",
    "Cole", "Colin", "Connor", "Cooper", "Corey", "Cory", "Craig", "Curtis", "Dale", "Damian",
    "Daniel", "Danny", "Darren", "David", "Dean", "Dennis", "Derek", "Devin", "Diego",
    "Dominic", "Donald", "Douglas", "Drew", "Duncan", "Dylan", "Earl", "Eddie", "Edgar",
    "Edward", "Eli", "Elijah", "Elliott", "Eric", "Ernest", "Ethan", "Eugene", "Evan", "Felix",
    "Fernando", "Frank", "Franklin", "Frederick", "Gabriel", "Garrett", "Gary", "Gavin",
    "George", "Gerald", "Gilbert", "Gordon", "Graham", "Grant", "Gregory", "Griffin", "Harold",
    "Harrison", "Harvey", "Hayden", "Hector", "Henry", "Hudson", "Hugh", "Hunter", "Ian",
    "Isaac", "Isaiah", "Ivan", "Jack", "Jackson", "Jacob", "Jake", "James", "Jared", "Jason",
    "Javier", "Jay", "Jeffrey", "Jeremy", "Jerome", "Jesse", "Jesus", "Joel", "John", "Jonah",
    "Jonathan", "Jordan", "Jose", "Joseph", "Joshua", "Juan", "Julian", "Julius", "Justin",
    "Karl", "Keith", "Kenneth", "Kevin", "Kyle", "Lance", "Larry", "Lawrence", "Leo", "Leonard",
    "Levi", "Lewis", "Liam", "Lincoln", "Logan", "Louis", "Lucas", "Luke", "Malcolm", "Marcus",
    "Mark", "Martin", "Mason", "Matthew", "Maurice", "Max", "Maxwell", "Michael", "Miles",
    "Mitchell", "Morgan", "Nathan", "Nathaniel", "Neil", "Nicholas", "Noah", "Nolan", "Oliver",
    "Omar", "Oscar", "Owen", "Parker", "Patrick", "Paul", "Peter", "Philip", "Preston",
    "Quentin", "Ralph", "Randall", "Raymond", "Reed", "Richard", "Riley", "Robert", "Roger",
    "Ronald", "Ross", "Roy", "Russell", "Ryan", "Samuel", "Scott", "Sean", "Sebastian", "Shane",
    "Shawn", "Simon", "Spencer", "Stephen", "Steven", "Stewart", "Theodore", "Thomas",
    "Timothy", "Todd", "Tommy", "Tony", "Travis", "Trevor", "Tyler", "Victor", "Vincent",
    "Wade", "Walter", "Warren", "Wayne", "Wesley", "William", "Wyatt", "Xavier", "Zachary",
];

/// Popular female first names
pub static FEMALE_FIRST_NAMES: &[&str] = &[
    "Abigail", "Ada", "Addison", "Adelaide", "Adriana", "Adrienne", "Agnes", "Alexandra",
    "Alice", "Allison", "Amanda", "Amber", "Amelia", "Amy", "Andrea", "Angela", "Angelica",
    "Anita", "Anna", "Anne", "Annie", "Aria", "Ariana", "Ashley", "Aubrey", "Audrey", "Aurora",
    "Ava", "Avery", "Barbara", "Beatrice", "Bella", "Beth", "Betty", "Beverly", "Bianca",
    "Bonnie", "Brenda", "Brianna", "Bridget", "Brittany", "Brooke", "Brooklyn", "Camila",
    "Candace", "Carmen", "Carol", "Caroline", "Carolyn", "Catherine", "Cathy", "Charlotte",
    "Chelsea", "Cheryl", "Chloe", "Christina", "Christine", "Clara", "Claire", "Claudia",
    "Courtney", "Crystal", "Cynthia", "Daisy", "Dana", "Danielle", "Dawn", "Deborah", "Debra",
    "Denise", "Diana", "Diane", "Dolores", "Donna", "Doris", "Dorothy", "Eden", "Edith",
    "Eleanor", "Elizabeth", "Ella", "Ellen", "Emily", "Emma", "Erin", "Esther", "Eva", "Evelyn",
    "Faith", "Fiona", "Frances", "Gabriella", "Gail", "Georgia", "Gina", "Gloria", "Grace",
    "Hailey", "Hannah", "Harper", "Heather", "Helen", "Holly", "Hope", "Isabella", "Isabelle",
    "Ivy", "Jackie", "Jacqueline", "Jane", "Janet", "Janice", "Jasmine", "Jean", "Jenna",
    "Jennifer", "Jessica", "Jill", "Joan", "Joanne", "Jocelyn", "Jordan", "Josephine", "Joyce",
    "Judith", "Judy", "Julia", "Julie", "June", "Karen", "Katherine", "Kathleen", "Kathryn",
    "Katie", "Kayla", "Kelly", "Kendra", "Kennedy", "Kimberly", "Kylie", "Laura", "Lauren",
    "Leah", "Leslie", "Lillian", "Lily", "Linda", "Lisa", "Lori", "Louise", "Lucy", "Luna",
    "Lynn", "Madison", "Margaret", "Maria", "Marie", "Marilyn", "Martha", "Mary", "Megan",
    "Melanie", "Melissa", "Mia", "Michelle", "Mila", "Miranda", "Monica", "Morgan", "Nancy",
    "Naomi", "Natalie", "Natasha", "Nicole", "Nina", "Nora", "Olivia", "Paige", "Pamela",
    "Patricia", "Paula", "Penelope", "Phoenix", "Phyllis", "Quinn", "Rachel", "Rebecca",
    "Regina", "Riley", "Robin", "Rosa", "Rose", "Ruby", "Ruth", "Samantha", "Sandra", "Sara",
    "Sarah", "Savannah", "Scarlett", "Sharon", "Shirley", "Sophia", "Stephanie", "Susan",
    "Suzanne", "Taylor", "Teresa", "Theresa", "Tiffany", "Tracy", "Valentina", "Valerie",
    "Vanessa", "Vera", "Victoria", "Violet", "Virginia", "Vivian", "Wendy", "Whitney", "Zoe",
    "Zoey",
];

/// Popular male middle names
pub static MALE_MIDDLE_NAMES: &[&str] = &[
    "Aaron", "Abel", "Adam", "Alan", "Albert", "Alexander", "Andre", "Andrew", "Anthony",
    "Antonio", "Arthur", "Austin", "Benjamin", "Blake", "Bradley", "Brandon", "Brian", "Bruce",
    "Bryan", "Caleb", "Calvin", "Carl", "Carter", "Charles", "Chase", "Christian",
    "Christopher", "Cole", "Connor", "Craig", "Curtis", "Dale", "Daniel", "David", "Dean",
    "Dennis", "Derek", "Douglas", "Drew", "Dylan", "Earl", "Eddie", "Edward", "Eli", "Elliott",
    "Eric", "Ernest", "Ethan", "Eugene", "Evan", "Felix", "Frank", "Franklin", "Frederick",
    "Gabriel", "Gary", "George", "Gerald", "Gilbert", "Gordon", "Graham", "Grant", "Gregory",
    "Harold", "Harrison", "Harvey", "Henry", "Hugh", "Hunter", "Ian", "Isaac", "Isaiah", "Jack",
    "Jacob", "James", "Jared", "Jason", "Jay", "Jeffrey", "Jeremy", "Jerome", "Jesse", "Joel",
    "John", "Jonathan", "Jordan", "Jose", "Joseph", "Joshua", "Julian", "Justin", "Keith",
    "Kenneth", "Kevin", "Kyle", "Lance", "Larry", "Lawrence", "Lee", "Leo", "Leonard", "Lewis",
    "Louis", "Lucas", "Luke", "Malcolm", "Marcus", "Mark", "Martin", "Matthew", "Maurice",
    "Max", "Michael", "Miles", "Mitchell", "Nathan", "Neil", "Nicholas", "Noah", "Oliver",
    "Oscar", "Owen", "Parker", "Patrick", "Paul", "Peter", "Philip", "Preston", "Ralph",
    "Raymond", "Reed", "Richard", "Robert", "Roger", "Ronald", "Ross", "Roy", "Russell", "Ryan",
    "Samuel", "Scott", "Sean", "Sebastian", "Shane", "Simon", "Spencer", "Stephen", "Steven",
    "Theodore", "Thomas", "Timothy", "Todd", "Travis", "Trevor", "Tyler", "Victor", "Vincent",
    "Wade", "Walter", "Warren", "Wayne", "Wesley", "William", "Zachary",
];

/// Popular female middle names
pub static FEMALE_MIDDLE_NAMES: &[&str] = &[
    "Abigail", "Ada", "Adelaide", "Alice", "Amanda", "Amy", "Andrea", "Angela", "Ann", "Anna",
    "Anne", "Ashley", "Aubrey", "Audrey", "Ava", "Barbara", "Beth", "Beverly", "Brenda",
    "Brianna", "Brooke", "Carol", "Caroline", "Catherine", "Charlotte", "Cheryl", "Chloe",
    "Christina", "Christine", "Claire", "Clara", "Claudia", "Crystal", "Cynthia", "Dana",
    "Dawn", "Deborah", "Denise", "Diana", "Diane", "Donna", "Doris", "Dorothy", "Eden",
    "Eleanor", "Elizabeth", "Ellen", "Emily", "Emma", "Erin", "Esther", "Eva", "Evelyn",
    "Faith", "Fiona", "Frances", "Gabrielle", "Gail", "Georgia", "Gloria", "Grace", "Hannah",
    "Harper", "Heather", "Helen", "Holly", "Hope", "Isabella", "Ivy", "Jackie", "Jane", "Janet",
    "Janice", "Jean", "Jenna", "Jennifer", "Jessica", "Jill", "Joan", "Joanne", "Jordan",
    "Josephine", "Joyce", "Judith", "Julia", "Julie", "June", "Karen", "Katherine", "Kathleen",
    "Katie", "Kayla", "Kelly", "Kimberly", "Laura", "Lauren", "Leah", "Leslie", "Lillian",
    "Linda", "Lisa", "Lori", "Louise", "Lucy", "Lynn", "Madison", "Margaret", "Maria", "Marie",
    "Marilyn", "Martha", "Mary", "Megan", "Melanie", "Michelle", "Miranda", "Monica", "Nancy",
    "Natalie", "Nicole", "Nina", "Nora", "Olivia", "Paige", "Pamela", "Patricia", "Paula",
    "Penelope", "Phyllis", "Rachel", "Rebecca", "Regina", "Robin", "Rose", "Ruby", "Ruth",
    "Samantha", "Sandra", "Sara", "Sarah", "Sharon", "Shirley", "Sophia", "Stephanie", "Susan",
    "Suzanne", "Taylor", "Teresa", "Theresa", "Tiffany", "Tracy", "Valerie", "Vanessa",
    "Victoria", "Violet", "Virginia", "Vivian", "Wendy", "Whitney",
];

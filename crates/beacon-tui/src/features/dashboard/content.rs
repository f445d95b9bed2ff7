//! Static portal snapshot shown in the dashboard content panels.

pub struct Announcement {
    pub from: &'static str,
    pub message: &'static str,
    pub time: &'static str,
    pub tag: &'static str,
}

pub const STUDENT_ANNOUNCEMENTS: &[Announcement] = &[
    Announcement {
        from: "Dean's Office",
        message: "Mid-semester exams postponed to next week",
        time: "2 hours ago",
        tag: "important",
    },
    Announcement {
        from: "Prof. Smith",
        message: "Assignment 3 deadline extended by 2 days",
        time: "5 hours ago",
        tag: "update",
    },
    Announcement {
        from: "Robotics Club",
        message: "Workshop registration now open",
        time: "1 day ago",
        tag: "event",
    },
    Announcement {
        from: "Admin",
        message: "Campus closed on Friday for maintenance",
        time: "2 days ago",
        tag: "holiday",
    },
];

pub const WEEKDAYS: &[&str] = &["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"];

pub struct Slot {
    pub time: &'static str,
    pub detail: &'static str,
}

pub const STUDENT_SLOTS: &[Slot] = &[
    Slot {
        time: "9:00 AM - 10:30 AM",
        detail: "Data Structures - Room 301",
    },
    Slot {
        time: "11:00 AM - 12:30 PM",
        detail: "Database Systems - Lab 2",
    },
];

pub const FACULTY_SLOTS: &[Slot] = &[
    Slot {
        time: "9:00 AM - 10:30 AM",
        detail: "Data Structures - CS3A",
    },
    Slot {
        time: "2:00 PM - 3:30 PM",
        detail: "Database Lab - CS3B",
    },
];

pub struct AttendanceRow {
    pub subject: &'static str,
    pub attended: u32,
    pub total: u32,
    pub percentage: &'static str,
}

pub const ATTENDANCE: &[AttendanceRow] = &[
    AttendanceRow {
        subject: "Data Structures",
        attended: 28,
        total: 30,
        percentage: "93.3%",
    },
    AttendanceRow {
        subject: "Database Systems",
        attended: 28,
        total: 30,
        percentage: "93.3%",
    },
    AttendanceRow {
        subject: "Operating Systems",
        attended: 28,
        total: 30,
        percentage: "93.3%",
    },
    AttendanceRow {
        subject: "Computer Networks",
        attended: 28,
        total: 30,
        percentage: "93.3%",
    },
];

pub struct AssignmentCard {
    pub title: &'static str,
    pub due: &'static str,
    pub detail: &'static str,
}

pub const STUDENT_ASSIGNMENTS: &[AssignmentCard] = &[
    AssignmentCard {
        title: "Data Structures Assignment 3",
        due: "Due Tomorrow",
        detail: "Implement Binary Search Tree with AVL balancing",
    },
    AssignmentCard {
        title: "Database Project",
        due: "Due in 3 days",
        detail: "Design and implement college management system",
    },
];

pub struct StudentRecord {
    pub name: &'static str,
    pub roll_no: &'static str,
}

pub const FACULTY_STUDENTS: &[StudentRecord] = &[
    StudentRecord {
        name: "John Doe",
        roll_no: "CS2021001",
    },
    StudentRecord {
        name: "Jane Smith",
        roll_no: "CS2021002",
    },
    StudentRecord {
        name: "Mike Johnson",
        roll_no: "CS2021003",
    },
    StudentRecord {
        name: "Sarah Williams",
        roll_no: "CS2021004",
    },
];

pub struct Member {
    pub name: &'static str,
    pub position: &'static str,
    pub email: &'static str,
}

pub const CLUB_MEMBERS: &[Member] = &[
    Member {
        name: "Alice Johnson",
        position: "President",
        email: "alice@college.edu",
    },
    Member {
        name: "Bob Smith",
        position: "Vice President",
        email: "bob@college.edu",
    },
    Member {
        name: "Carol Davis",
        position: "Secretary",
        email: "carol@college.edu",
    },
    Member {
        name: "David Wilson",
        position: "Member",
        email: "david@college.edu",
    },
];
